//! Raw cell values as they arrive from tabular collision data.

use std::collections::BTreeMap;
use std::fmt;

/// Cell spellings that denote a missing value.
///
/// Matches the conventional NA vocabulary used by spreadsheet exports and
/// dataframe tooling, so a blank `fatalities` cell and a literal `NA` are
/// treated alike.
pub const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A single field mapping keyed by column name.
///
/// This is both the input of [`Collision::parse`](crate::Collision::parse)
/// and the output of [`Collision::serialize`](crate::Collision::serialize).
pub type RawRow = BTreeMap<String, FieldValue>;

/// A dynamically typed cell value.
///
/// `Missing` stands in for every "not a number" or blank cell; numeric
/// variants never carry a sentinel.
///
/// # Examples
/// ```
/// use collisions_core::FieldValue;
///
/// assert_eq!(FieldValue::infer("2020"), FieldValue::Integer(2020));
/// assert_eq!(FieldValue::infer("NA"), FieldValue::Missing);
/// assert!(FieldValue::Integer(2020).matches(&FieldValue::Float(2020.0)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FieldValue {
    /// The source left the cell blank or marked it as not available.
    #[default]
    Missing,
    /// A `True`/`False` cell.
    Boolean(bool),
    /// A whole number.
    Integer(i64),
    /// A floating point number. Never `NaN`.
    Float(f64),
    /// Anything that is not numeric, kept verbatim.
    Text(String),
}

impl FieldValue {
    /// Decode a single cell without column context.
    ///
    /// Missing tokens become [`FieldValue::Missing`], then booleans,
    /// integers and floats are tried in that order before falling back to
    /// text.
    #[must_use]
    pub fn infer(cell: &str) -> Self {
        if is_missing_token(cell) {
            return Self::Missing;
        }
        if let Some(flag) = parse_bool(cell) {
            return Self::Boolean(flag);
        }
        if let Some(number) = parse_integer(cell) {
            return Self::Integer(number);
        }
        match parse_float(cell) {
            Some(number) => Self::Float(number),
            None => Self::Text(cell.to_owned()),
        }
    }

    /// Report whether the value is [`FieldValue::Missing`].
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Compare two values the way collection filters do.
    ///
    /// Integers and floats compare numerically and booleans count as `0`
    /// or `1` against them, so `true` matches `1` and `1.0`. `Missing`
    /// matches `Missing`; text only matches equal text.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Missing, Self::Missing) => true,
            (Self::Boolean(lhs), Self::Boolean(rhs)) => lhs == rhs,
            (Self::Integer(lhs), Self::Integer(rhs)) => lhs == rhs,
            (Self::Float(lhs), Self::Float(rhs)) => lhs == rhs,
            (Self::Integer(int), Self::Float(float)) | (Self::Float(float), Self::Integer(int)) => {
                integer_equals_float(*int, *float)
            }
            (Self::Boolean(flag), Self::Integer(int)) | (Self::Integer(int), Self::Boolean(flag)) => {
                i64::from(*flag) == *int
            }
            (Self::Boolean(flag), Self::Float(float)) | (Self::Float(float), Self::Boolean(flag)) => {
                integer_equals_float(i64::from(*flag), *float)
            }
            (Self::Text(lhs), Self::Text(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

#[expect(
    clippy::cast_precision_loss,
    clippy::float_cmp,
    reason = "numeric equality across integer and float cells is intentionally exact"
)]
fn integer_equals_float(int: i64, float: f64) -> bool {
    int as f64 == float
}

/// Report whether `cell` is one of the [`MISSING_TOKENS`].
#[must_use]
pub fn is_missing_token(cell: &str) -> bool {
    MISSING_TOKENS.contains(&cell)
}

/// Parse a boolean cell (`True`, `true`, `TRUE` and the `False` spellings).
#[must_use]
pub fn parse_bool(cell: &str) -> Option<bool> {
    match cell.trim() {
        "True" | "true" | "TRUE" => Some(true),
        "False" | "false" | "FALSE" => Some(false),
        _ => None,
    }
}

/// Parse an integer cell, ignoring surrounding whitespace.
#[must_use]
pub fn parse_integer(cell: &str) -> Option<i64> {
    cell.trim().parse().ok()
}

/// Parse a floating point cell, ignoring surrounding whitespace.
///
/// `NaN` spellings that slipped past [`MISSING_TOKENS`] are rejected so that
/// a float value is never a sentinel.
#[must_use]
pub fn parse_float(cell: &str) -> Option<f64> {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|number| !number.is_nan())
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("<missing>"),
            Self::Boolean(flag) => write!(f, "{flag}"),
            Self::Integer(number) => write!(f, "{number}"),
            Self::Float(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<Option<u32>> for FieldValue {
    fn from(value: Option<u32>) -> Self {
        value.map_or(Self::Missing, Self::from)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Self::Missing
        } else {
            Self::Float(value)
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

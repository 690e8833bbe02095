//! Attribute equality filters over collisions.

use crate::{Collision, Field, FieldValue, UnknownFieldError};

/// A conjunction of `field == value` constraints.
///
/// An empty filter matches every collision.
///
/// # Examples
/// ```
/// use collisions_core::{CollisionFilter, Field};
///
/// let filter = CollisionFilter::new()
///     .with(Field::State, "VIC")
///     .with(Field::Year, 2020);
/// assert_eq!(filter.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionFilter {
    constraints: Vec<(Field, FieldValue)>,
}

impl CollisionFilter {
    /// Create a filter without constraints.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            constraints: Vec::new(),
        }
    }

    /// Add a constraint requiring `field` to equal `value`.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<FieldValue>) -> Self {
        self.constraints.push((field, value.into()));
        self
    }

    /// Build a filter from column-name keyed pairs.
    ///
    /// # Errors
    /// Returns [`UnknownFieldError`] for the first name that is not a
    /// [`Field`].
    ///
    /// # Examples
    /// ```
    /// use collisions_core::{CollisionFilter, FieldValue};
    ///
    /// let filter = CollisionFilter::from_names([("state", FieldValue::from("NSW"))])?;
    /// assert!(!filter.is_empty());
    ///
    /// let err = CollisionFilter::from_names([("colour", FieldValue::from("red"))]);
    /// assert!(err.is_err());
    /// # Ok::<(), collisions_core::UnknownFieldError>(())
    /// ```
    pub fn from_names<I, K, V>(pairs: I) -> Result<Self, UnknownFieldError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<FieldValue>,
    {
        pairs
            .into_iter()
            .try_fold(Self::new(), |filter, (name, value)| {
                let field = name.as_ref().parse::<Field>()?;
                Ok(filter.with(field, value))
            })
    }

    /// Report whether every constraint holds for `collision`.
    #[must_use]
    pub fn matches(&self, collision: &Collision) -> bool {
        self.constraints
            .iter()
            .all(|(field, expected)| collision.field_matches(*field, expected))
    }

    /// Number of constraints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Report whether the filter has no constraints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Iterate over the constraints in insertion order.
    pub fn constraints(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        self.constraints.iter().map(|(field, value)| (*field, value))
    }
}

//! CSV decoding with per-column type inference.

use std::io::Read;

use collisions_core::{
    FieldValue, RawRow, is_missing_token, parse_bool, parse_float, parse_integer,
};

/// Storage class inferred for a whole column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColumnKind {
    /// No non-missing cells.
    Empty,
    Boolean,
    Integer,
    Float,
    Text,
}

impl ColumnKind {
    fn classify(cell: &str) -> Self {
        if is_missing_token(cell) {
            Self::Empty
        } else if parse_bool(cell).is_some() {
            Self::Boolean
        } else if parse_integer(cell).is_some() {
            Self::Integer
        } else if parse_float(cell).is_some() {
            Self::Float
        } else {
            Self::Text
        }
    }

    fn widen(self, other: Self) -> Self {
        match (self, other) {
            (Self::Empty, kind) | (kind, Self::Empty) => kind,
            (Self::Integer, Self::Float) | (Self::Float, Self::Integer) => Self::Float,
            (lhs, rhs) if lhs == rhs => lhs,
            _ => Self::Text,
        }
    }

    fn decode(self, cell: &str) -> FieldValue {
        if is_missing_token(cell) {
            return FieldValue::Missing;
        }
        let text = || FieldValue::Text(cell.to_owned());
        match self {
            Self::Boolean => parse_bool(cell).map_or_else(text, FieldValue::Boolean),
            Self::Integer => parse_integer(cell).map_or_else(text, FieldValue::Integer),
            Self::Float => parse_float(cell).map_or_else(text, FieldValue::Float),
            Self::Empty | Self::Text => text(),
        }
    }
}

/// A decoded data row and the line it started on.
pub(crate) struct DecodedRow {
    pub(crate) line: u64,
    pub(crate) row: RawRow,
}

/// Read a headed CSV document into raw rows.
///
/// Every column gets one storage class: booleans, integers, floats, or
/// verbatim text when the column mixes kinds. Missing tokens decode to
/// [`FieldValue::Missing`] in every class.
pub(crate) fn read_rows<R: Read>(reader: R) -> Result<Vec<DecodedRow>, csv::Error> {
    let mut table = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = table.headers()?.clone();
    let records = table
        .records()
        .collect::<Result<Vec<csv::StringRecord>, csv::Error>>()?;

    let kinds: Vec<ColumnKind> = (0..headers.len())
        .map(|column| infer_column(&records, column))
        .collect();

    Ok(records
        .iter()
        .map(|record| DecodedRow {
            line: record.position().map_or(0, csv::Position::line),
            row: headers
                .iter()
                .zip(&kinds)
                .zip(record.iter())
                .map(|((name, kind), cell)| (name.to_owned(), kind.decode(cell)))
                .collect(),
        })
        .collect())
}

fn infer_column(records: &[csv::StringRecord], column: usize) -> ColumnKind {
    let mut kind = ColumnKind::Empty;
    for cell in records.iter().filter_map(|record| record.get(column)) {
        kind = kind.widen(ColumnKind::classify(cell));
        if kind == ColumnKind::Text {
            break;
        }
    }
    kind
}

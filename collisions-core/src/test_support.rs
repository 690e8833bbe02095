//! Builders for complete collision rows used by unit and behaviour tests.

use crate::{Collision, Field, FieldValue, RawRow};

/// Builds a [`RawRow`] that names every [`Field`], defaulting to
/// [`FieldValue::Missing`].
#[derive(Debug, Clone)]
pub struct CollisionBuilder {
    row: RawRow,
}

impl CollisionBuilder {
    /// Start a row for the given crash identifier.
    #[must_use]
    pub fn new(crash_id: &str) -> Self {
        let row = Field::ALL
            .iter()
            .map(|field| (field.name().to_owned(), FieldValue::Missing))
            .collect();
        Self { row }.set(Field::CrashId, crash_id)
    }

    /// Set an arbitrary field.
    #[must_use]
    pub fn set(mut self, field: Field, value: impl Into<FieldValue>) -> Self {
        self.row.insert(field.name().to_owned(), value.into());
        self
    }

    /// Set the `state` column.
    #[must_use]
    pub fn state(self, state: &str) -> Self {
        self.set(Field::State, state)
    }

    /// Set the `year` column.
    #[must_use]
    pub fn year(self, year: i64) -> Self {
        self.set(Field::Year, year)
    }

    /// Parse the row, panicking on invalid counter values.
    ///
    /// # Panics
    /// Panics when a counter field was set to a value that cannot be coerced.
    #[must_use]
    pub fn build(self) -> Collision {
        match Collision::parse(self.row) {
            Ok(collision) => collision,
            Err(err) => panic!("test collision row is invalid: {err}"),
        }
    }
}

//! Construction and serialisation of [`Collision`] records.

use crate::{Collision, CollisionParseError, Field, FieldValue, RawRow};

/// Inputs accepted by [`Collision::parse`].
///
/// Raw rows are decoded; collisions pass through untouched, so callers can
/// run mixed inputs through the same parse step.
pub trait IntoCollision {
    /// Produce a [`Collision`] from `self`.
    ///
    /// # Errors
    /// Returns [`CollisionParseError`] when a raw row lacks a column or holds
    /// a counter value that cannot be coerced.
    fn into_collision(self) -> Result<Collision, CollisionParseError>;
}

impl IntoCollision for RawRow {
    fn into_collision(self) -> Result<Collision, CollisionParseError> {
        Collision::decode(self)
    }
}

impl IntoCollision for Collision {
    fn into_collision(self) -> Result<Collision, CollisionParseError> {
        Ok(self)
    }
}

impl Collision {
    /// Build a collision from a raw row, or pass an existing one through.
    ///
    /// Every [`Field`] name must be present in a raw row, even when its value
    /// is [`FieldValue::Missing`]. Columns the schema does not know are
    /// ignored.
    ///
    /// # Errors
    /// [`CollisionParseError::MissingField`] when a column is absent and
    /// [`CollisionParseError::InvalidValue`] when a counter column holds text,
    /// a negative number, or a number beyond `u32::MAX`.
    ///
    /// # Examples
    /// ```
    /// use collisions_core::{Collision, Field, FieldValue, RawRow};
    ///
    /// let mut row: RawRow = Field::ALL
    ///     .iter()
    ///     .map(|field| (field.name().to_owned(), FieldValue::Missing))
    ///     .collect();
    /// row.insert("fatalities".into(), FieldValue::Float(2.0));
    ///
    /// let collision = Collision::parse(row)?;
    /// assert_eq!(collision.fatalities(), Some(2));
    /// assert_eq!(collision.hour(), None);
    ///
    /// // Already-built collisions are returned unchanged.
    /// let again = Collision::parse(collision.clone())?;
    /// assert_eq!(again, collision);
    /// # Ok::<(), collisions_core::CollisionParseError>(())
    /// ```
    pub fn parse<T: IntoCollision>(input: T) -> Result<Self, CollisionParseError> {
        input.into_collision()
    }

    /// Dump every field into a [`RawRow`] keyed by column name.
    ///
    /// The result feeds straight back into [`Collision::parse`].
    #[must_use]
    pub fn serialize(&self) -> RawRow {
        Field::ALL
            .iter()
            .map(|field| (field.name().to_owned(), self.value(*field)))
            .collect()
    }
}

impl TryFrom<RawRow> for Collision {
    type Error = CollisionParseError;

    fn try_from(row: RawRow) -> Result<Self, Self::Error> {
        Self::decode(row)
    }
}

impl From<Collision> for RawRow {
    fn from(collision: Collision) -> Self {
        collision.serialize()
    }
}

/// Coerce a counter cell into a non-negative integer.
///
/// Floats are truncated toward zero, matching how integral columns that
/// contain blanks arrive as floating point.
pub(crate) fn coerce_count(
    field: Field,
    value: FieldValue,
) -> Result<Option<u32>, CollisionParseError> {
    let coerced = match &value {
        FieldValue::Missing => return Ok(None),
        FieldValue::Boolean(flag) => Some(u32::from(*flag)),
        FieldValue::Integer(number) => u32::try_from(*number).ok(),
        FieldValue::Float(number) => float_to_count(*number),
        FieldValue::Text(_) => None,
    };
    coerced
        .map(Some)
        .ok_or_else(|| CollisionParseError::InvalidValue {
            field: field.name(),
            value: value.to_string(),
        })
}

fn float_to_count(number: f64) -> Option<u32> {
    let truncated = number.trunc();
    if !truncated.is_finite() || truncated < 0.0 || truncated > f64::from(u32::MAX) {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "range checked above"
    )]
    let count = truncated as u32;
    Some(count)
}

//! The ordered collision container.

use std::ops::Deref;

use log::debug;

use crate::{Collision, CollisionFilter, FieldValue, RawRow, UnknownFieldError};

/// An ordered, owned group of [`Collision`] records.
///
/// Order is insertion order and no field is required to be unique. Read
/// access goes through the slice API via [`Deref`]; the only mutations are
/// appends.
///
/// # Examples
/// ```
/// use collisions_core::{CollisionFilter, Collisions, Field};
///
/// let collisions = Collisions::new();
/// let victorian = collisions.filter(&CollisionFilter::new().with(Field::State, "VIC"));
/// assert!(victorian.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collisions {
    records: Vec<Collision>,
}

impl Collisions {
    /// Create an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a single collision.
    pub fn push(&mut self, collision: Collision) {
        self.records.push(collision);
    }

    /// Move every collision from `other` onto the end of `self`.
    pub fn append(&mut self, mut other: Self) {
        self.records.append(&mut other.records);
    }

    /// Return a new collection holding the collisions that satisfy `filter`.
    ///
    /// The source collection is left untouched and relative order is kept.
    #[must_use]
    pub fn filter(&self, filter: &CollisionFilter) -> Self {
        debug!(
            "Filtering {} collisions on {} constraints",
            self.records.len(),
            filter.len()
        );
        self.records
            .iter()
            .filter(|collision| filter.matches(collision))
            .cloned()
            .collect()
    }

    /// Filter on column-name keyed pairs.
    ///
    /// # Errors
    /// Returns [`UnknownFieldError`] when a name is not a collision field.
    pub fn filter_by_name<I, K, V>(&self, pairs: I) -> Result<Self, UnknownFieldError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<FieldValue>,
    {
        let filter = CollisionFilter::from_names(pairs)?;
        Ok(self.filter(&filter))
    }

    /// Dump every collision as a [`RawRow`], in order.
    #[must_use]
    pub fn serialize(&self) -> Vec<RawRow> {
        self.records.iter().map(Collision::serialize).collect()
    }

    /// Consume the collection, returning the underlying records.
    #[must_use]
    pub fn into_vec(self) -> Vec<Collision> {
        self.records
    }
}

impl Deref for Collisions {
    type Target = [Collision];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl From<Vec<Collision>> for Collisions {
    fn from(records: Vec<Collision>) -> Self {
        Self { records }
    }
}

impl FromIterator<Collision> for Collisions {
    fn from_iter<I: IntoIterator<Item = Collision>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<Collision> for Collisions {
    fn extend<I: IntoIterator<Item = Collision>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl IntoIterator for Collisions {
    type Item = Collision;
    type IntoIter = std::vec::IntoIter<Collision>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collisions {
    type Item = &'a Collision;
    type IntoIter = std::slice::Iter<'a, Collision>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

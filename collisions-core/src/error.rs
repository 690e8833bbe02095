//! Error types raised while building or querying collisions.

use thiserror::Error;

/// Errors returned by [`Collision::parse`](crate::Collision::parse).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CollisionParseError {
    /// The raw row did not contain one of the expected columns.
    #[error("missing field `{field}`")]
    MissingField {
        /// Column name that was absent.
        field: &'static str,
    },
    /// A counter column held a value that is not a non-negative integer.
    #[error("field `{field}` expects a non-negative integer, found `{value}`")]
    InvalidValue {
        /// Column name of the offending value.
        field: &'static str,
        /// Rendered form of the rejected value.
        value: String,
    },
}

/// A field name that does not exist on [`Collision`](crate::Collision).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("collision has no field named `{name}`")]
pub struct UnknownFieldError {
    /// The name that failed to resolve.
    pub name: String,
}

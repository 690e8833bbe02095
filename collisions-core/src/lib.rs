//! Core domain types for road collision records.
//!
//! A [`Collision`] is one collision event with a fixed set of attributes
//! named by [`Field`]. [`Collisions`] holds records in load order and
//! supports equality filtering through [`CollisionFilter`]. Raw cells are
//! modelled by [`FieldValue`], where [`FieldValue::Missing`] replaces every
//! not-a-number sentinel.
//!
//! This crate performs no I/O; archive and CSV loading live in
//! `collisions-data`.
#![forbid(unsafe_code)]

mod collection;
mod collision;
mod error;
mod filter;
mod schema;
mod value;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use collection::Collisions;
pub use collision::IntoCollision;
pub use error::{CollisionParseError, UnknownFieldError};
pub use filter::CollisionFilter;
pub use schema::{Collision, Field, FieldKind};
pub use value::{
    FieldValue, MISSING_TOKENS, RawRow, is_missing_token, parse_bool, parse_float, parse_integer,
};

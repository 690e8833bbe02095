//! Facade crate for the road collisions dataset.
//!
//! This crate re-exports the core record types and the archive loaders so
//! callers can depend on a single package.
//!
//! ```no_run
//! use road_collisions::{CollisionFilter, Field, load_all};
//!
//! let collisions = load_all()?;
//! let fatal = collisions.filter(&CollisionFilter::new().with(Field::Fatalities, 1));
//! println!("{} collisions with one fatality", fatal.len());
//! # Ok::<(), road_collisions::LoadError>(())
//! ```

#![forbid(unsafe_code)]

pub use collisions_core::{
    Collision, CollisionFilter, CollisionParseError, Collisions, Field, FieldKind, FieldValue,
    IntoCollision, RawRow, UnknownFieldError,
};

pub use collisions_data::{
    ArchiveFormat, DEFAULT_REGION, LoadError, RESOURCES_ENV, ResourceRoot, load_all,
    load_all_from, load_archive, load_archive_in, load_dir,
};

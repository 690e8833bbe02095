//! Loading road collision records from compressed archives.
//!
//! Responsibilities:
//! - Unpack `.tgz`/`.gz` archives into private scratch directories.
//! - Decode the CSV members with per-column type inference.
//! - Walk resource trees and concatenate every archive found.
//! - Resolve the bundled resource directory.
//!
//! Boundaries:
//! - Record construction and filtering live in `collisions-core`.
//! - No logger is installed here; records go through the `log` facade.
//!
//! Invariants:
//! - A load either returns every record or fails; there are no partial
//!   results.
//! - Extraction never outlives the load that requested it.
#![forbid(unsafe_code)]

mod archive;
mod directory;
mod error;
mod resources;
mod table;

pub use archive::{ArchiveFormat, is_archive, load_archive, load_archive_in};
pub use directory::load_dir;
pub use error::LoadError;
pub use resources::{DEFAULT_REGION, RESOURCES_ENV, ResourceRoot, load_all, load_all_from};

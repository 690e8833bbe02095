//! Error types produced while loading collision archives.

use std::{io, path::PathBuf};

use camino::Utf8PathBuf;
use collisions_core::CollisionParseError;
use thiserror::Error;

/// Errors produced while loading collisions from archives or directories.
///
/// Every variant aborts the whole load; no partial collection is returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// The path does not carry a recognised archive suffix.
    #[error("unsupported archive format for {path} (expected .tgz or .gz)")]
    UnsupportedFormat { path: Utf8PathBuf },
    /// The archive could not be opened.
    #[error("failed to open archive {path}: {source}")]
    OpenArchive { path: Utf8PathBuf, source: io::Error },
    /// The scratch directory used for extraction could not be created.
    #[error("failed to create extraction directory: {source}")]
    CreateScratch { source: io::Error },
    /// A path could not be represented as UTF-8.
    #[error("path {path:?} is not valid UTF-8")]
    NonUtf8Path { path: PathBuf },
    /// Unpacking the archive failed (corrupt data, permissions).
    #[error("failed to extract archive {path}: {source}")]
    Extraction { path: Utf8PathBuf, source: io::Error },
    /// Listing a directory failed.
    #[error("failed to scan directory {path}: {source}")]
    ScanDirectory { path: Utf8PathBuf, source: io::Error },
    /// An extracted CSV member could not be opened.
    #[error("failed to open {member} from {archive}: {source}")]
    OpenCsv {
        archive: Utf8PathBuf,
        member: Utf8PathBuf,
        source: io::Error,
    },
    /// An extracted CSV member was malformed.
    #[error("failed to read {member} from {archive}: {source}")]
    ReadCsv {
        archive: Utf8PathBuf,
        member: Utf8PathBuf,
        source: csv::Error,
    },
    /// A CSV row could not be turned into a collision.
    #[error("invalid row at {member}:{line} in {archive}: {source}")]
    ParseRow {
        archive: Utf8PathBuf,
        member: Utf8PathBuf,
        line: u64,
        source: CollisionParseError,
    },
}

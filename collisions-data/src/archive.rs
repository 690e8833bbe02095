//! Extraction and decoding of gzip-compressed tar archives.

use camino::{Utf8Path, Utf8PathBuf};
use collisions_core::{Collision, Collisions};
use collisions_fs::{discover_files, open_utf8_file};
use flate2::read::MultiGzDecoder;
use log::{debug, info};
use tempfile::TempDir;

use crate::{LoadError, table};

/// Archive encodings the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    /// A gzip-compressed tarball (`.tgz` or `.gz`).
    TarGz,
}

impl ArchiveFormat {
    /// Detect the format from the final extension of `path`.
    ///
    /// Matching is case-sensitive: `data.TGZ` is not recognised.
    #[must_use]
    pub fn from_path(path: &Utf8Path) -> Option<Self> {
        match path.extension() {
            Some("tgz" | "gz") => Some(Self::TarGz),
            _ => None,
        }
    }
}

/// Return whether `path` names a supported archive.
#[must_use]
pub fn is_archive(path: &Utf8Path) -> bool {
    ArchiveFormat::from_path(path).is_some()
}

/// An archive unpacked into a private scratch directory.
///
/// The directory and its contents are removed when the value is dropped, so
/// CSV members never leak into later loads.
struct ExtractedArchive {
    _scratch: TempDir,
    root: Utf8PathBuf,
}

impl ExtractedArchive {
    fn unpack(path: &Utf8Path, scratch_root: Option<&Utf8Path>) -> Result<Self, LoadError> {
        let file = open_utf8_file(path).map_err(|source| LoadError::OpenArchive {
            path: path.to_path_buf(),
            source,
        })?;
        let mut builder = tempfile::Builder::new();
        builder.prefix("road-collisions-");
        let scratch = match scratch_root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        }
        .map_err(|source| LoadError::CreateScratch { source })?;
        let root = Utf8PathBuf::from_path_buf(scratch.path().to_path_buf())
            .map_err(|path| LoadError::NonUtf8Path { path })?;

        // Multi-member gzip streams (bgzip, concatenated output) are one archive.
        let mut archive = tar::Archive::new(MultiGzDecoder::new(file.into_std()));
        archive
            .unpack(&root)
            .map_err(|source| LoadError::Extraction {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            _scratch: scratch,
            root,
        })
    }

    fn csv_members(&self) -> Result<Vec<Utf8PathBuf>, LoadError> {
        let files = discover_files(&self.root).map_err(|source| LoadError::ScanDirectory {
            path: self.root.clone(),
            source,
        })?;
        Ok(files
            .into_iter()
            .filter(|file| file.extension() == Some("csv"))
            .collect())
    }

    fn relative<'a>(&self, member: &'a Utf8Path) -> &'a Utf8Path {
        member.strip_prefix(&self.root).unwrap_or(member)
    }
}

/// Load every collision from the CSV members of one archive.
///
/// The archive is unpacked into a fresh temporary directory, every `.csv`
/// file found beneath it (recursively, hidden entries excluded) is parsed in
/// path order, and the scratch directory is removed before returning.
/// Archives with no CSV members yield an empty collection.
///
/// # Errors
///
/// Returns [`LoadError::UnsupportedFormat`] before any I/O when `path` does
/// not end in `.tgz` or `.gz`. Extraction failures, malformed CSV, and rows
/// that fail to parse abort the load.
pub fn load_archive(path: &Utf8Path) -> Result<Collisions, LoadError> {
    load_archive_with(path, None)
}

/// Load an archive like [`load_archive`], creating the scratch directory
/// beneath `scratch_root` instead of the system temporary directory.
///
/// # Errors
///
/// As for [`load_archive`]; also fails with [`LoadError::CreateScratch`]
/// when `scratch_root` is not a writable directory.
pub fn load_archive_in(path: &Utf8Path, scratch_root: &Utf8Path) -> Result<Collisions, LoadError> {
    load_archive_with(path, Some(scratch_root))
}

fn load_archive_with(
    path: &Utf8Path,
    scratch_root: Option<&Utf8Path>,
) -> Result<Collisions, LoadError> {
    if ArchiveFormat::from_path(path).is_none() {
        return Err(LoadError::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }

    let extracted = ExtractedArchive::unpack(path, scratch_root)?;
    let mut collisions = Collisions::new();
    for member in extracted.csv_members()? {
        let relative = extracted.relative(&member).to_path_buf();
        let loaded = load_member(path, &member, &relative)?;
        debug!("read {} collisions from {relative} in {path}", loaded.len());
        collisions.append(loaded);
    }
    info!("loaded {} collisions from {path}", collisions.len());
    Ok(collisions)
}

fn load_member(
    archive: &Utf8Path,
    member: &Utf8Path,
    relative: &Utf8Path,
) -> Result<Collisions, LoadError> {
    let file = open_utf8_file(member).map_err(|source| LoadError::OpenCsv {
        archive: archive.to_path_buf(),
        member: relative.to_path_buf(),
        source,
    })?;
    let rows = table::read_rows(file.into_std()).map_err(|source| LoadError::ReadCsv {
        archive: archive.to_path_buf(),
        member: relative.to_path_buf(),
        source,
    })?;
    rows.into_iter()
        .map(|decoded| {
            Collision::parse(decoded.row).map_err(|source| LoadError::ParseRow {
                archive: archive.to_path_buf(),
                member: relative.to_path_buf(),
                line: decoded.line,
                source,
            })
        })
        .collect()
}

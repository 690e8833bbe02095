//! Loading every archive found beneath a directory.

use std::io;

use camino::Utf8Path;
use collisions_core::Collisions;
use collisions_fs::discover_files;
use log::{debug, warn};

use crate::{LoadError, archive};

/// Load and concatenate every archive beneath `root`, optionally scoped to a
/// region subdirectory.
///
/// With `region` set, only `root/<region>` is searched. Files are discovered
/// recursively in path order; hidden entries are skipped and files without a
/// `.tgz` or `.gz` suffix are ignored. A search directory that does not exist
/// yields an empty collection and a warning rather than an error.
///
/// # Errors
///
/// Returns [`LoadError::ScanDirectory`] when the search directory exists but
/// cannot be listed, and propagates the first failure from
/// [`load_archive`](crate::load_archive).
pub fn load_dir(root: &Utf8Path, region: Option<&str>) -> Result<Collisions, LoadError> {
    let search = region.map_or_else(|| root.to_path_buf(), |name| root.join(name));
    let files = match discover_files(&search) {
        Ok(files) => files,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!("collision directory {search} does not exist; nothing to load");
            return Ok(Collisions::new());
        }
        Err(source) => return Err(LoadError::ScanDirectory { path: search, source }),
    };

    let mut collisions = Collisions::new();
    for file in files {
        if !archive::is_archive(&file) {
            debug!("skipping non-archive {file}");
            continue;
        }
        collisions.append(archive::load_archive(&file)?);
    }
    Ok(collisions)
}

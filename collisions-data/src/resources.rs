//! Location of the bundled collision archives.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use collisions_core::Collisions;

use crate::{LoadError, load_dir};

/// Environment variable overriding the bundled resource directory.
pub const RESOURCES_ENV: &str = "ROAD_COLLISIONS_RESOURCES";

/// Region subdirectory searched by [`load_all`].
pub const DEFAULT_REGION: &str = "anz";

const BUNDLED_RESOURCES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/resources");

/// Root directory holding per-region collision archives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRoot(Utf8PathBuf);

impl ResourceRoot {
    /// Use an explicit directory.
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self(path.into())
    }

    /// The directory shipped alongside this crate.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(BUNDLED_RESOURCES)
    }

    /// Resolve the root from the process environment, falling back to
    /// [`ResourceRoot::bundled`].
    #[must_use]
    pub fn resolve() -> Self {
        Self::resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve the root using `lookup` in place of the process environment.
    ///
    /// An unset or blank [`RESOURCES_ENV`] selects the bundled directory.
    pub fn resolve_with<F>(lookup: F) -> Self
    where
        F: FnOnce(&str) -> Option<String>,
    {
        lookup(RESOURCES_ENV)
            .filter(|value| !value.trim().is_empty())
            .map_or_else(Self::bundled, Self::new)
    }

    /// Borrow the directory path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.0
    }

    /// Load every archive for `region` beneath this root.
    ///
    /// # Errors
    ///
    /// See [`load_dir`].
    pub fn load_region(&self, region: &str) -> Result<Collisions, LoadError> {
        load_dir(&self.0, Some(region))
    }
}

impl Default for ResourceRoot {
    fn default() -> Self {
        Self::resolve()
    }
}

impl AsRef<Utf8Path> for ResourceRoot {
    fn as_ref(&self) -> &Utf8Path {
        self.path()
    }
}

impl fmt::Display for ResourceRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Load the bundled dataset for the default region.
///
/// # Errors
///
/// See [`load_dir`].
pub fn load_all() -> Result<Collisions, LoadError> {
    load_all_from(&ResourceRoot::resolve())
}

/// Load the default region from an explicit resource root.
///
/// # Errors
///
/// See [`load_dir`].
pub fn load_all_from(root: &ResourceRoot) -> Result<Collisions, LoadError> {
    root.load_region(DEFAULT_REGION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn falls_back_to_bundled_directory() {
        let root = ResourceRoot::resolve_with(|_| None);
        assert_eq!(root, ResourceRoot::bundled());
        assert!(root.path().ends_with("resources"));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_override_is_ignored(#[case] value: &str) {
        let root = ResourceRoot::resolve_with(|_| Some(value.to_owned()));
        assert_eq!(root, ResourceRoot::bundled());
    }

    #[rstest]
    fn environment_override_wins() {
        let root = ResourceRoot::resolve_with(|name| {
            (name == RESOURCES_ENV).then(|| "/srv/collisions".to_owned())
        });
        assert_eq!(root.path(), Utf8Path::new("/srv/collisions"));
        assert_eq!(root.to_string(), "/srv/collisions");
    }

    #[rstest]
    fn bundled_tree_ships_no_archives() {
        let loaded = load_all_from(&ResourceRoot::bundled()).expect("bundled tree loads");
        assert!(loaded.is_empty());
    }
}

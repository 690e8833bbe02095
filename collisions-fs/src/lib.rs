//! Shared filesystem helpers built on `cap-std` and `camino`.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open a UTF-8 file path using ambient authority.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Resolve an ambient directory for the given path and return the directory with the file name.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("target should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Return whether a path exists and is a directory using capability-based IO.
pub fn path_is_dir(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_dir())
}

/// Recursively list the regular files below `root`.
///
/// Hidden entries (names starting with `.`) are skipped and symbolic links
/// are not followed. Entries are visited in name order, so the result is
/// deterministic for a given tree. Returned paths are `root` joined with the
/// relative path of each file.
pub fn discover_files(root: &Utf8Path) -> io::Result<Vec<Utf8PathBuf>> {
    let dir = fs_utf8::Dir::open_ambient_dir(root, ambient_authority())?;
    let mut files = Vec::new();
    collect_files(&dir, root, &mut files)?;
    Ok(files)
}

fn collect_files(
    dir: &fs_utf8::Dir,
    prefix: &Utf8Path,
    files: &mut Vec<Utf8PathBuf>,
) -> io::Result<()> {
    let mut entries = Vec::new();
    for entry in dir.entries()? {
        let entry = entry?;
        let name = entry.file_name()?;
        if name.starts_with('.') {
            continue;
        }
        entries.push((name, entry));
    }
    entries.sort_by(|(lhs, _), (rhs, _)| lhs.cmp(rhs));

    for (name, entry) in entries {
        let path = prefix.join(&name);
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            let child = entry.open_dir()?;
            collect_files(&child, &path, files)?;
        } else if file_type.is_file() {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::fs;
    use tempfile::TempDir;

    #[fixture]
    fn tree() -> TempDir {
        let dir = TempDir::new().expect("tempdir");
        let root = dir.path();
        fs::create_dir_all(root.join("anz/nested")).expect("create nested dirs");
        fs::create_dir_all(root.join(".cache")).expect("create hidden dir");
        fs::write(root.join("anz/b.tgz"), b"b").expect("write b");
        fs::write(root.join("anz/a.csv"), b"a").expect("write a");
        fs::write(root.join("anz/nested/c.gz"), b"c").expect("write c");
        fs::write(root.join("anz/.hidden.tgz"), b"h").expect("write hidden file");
        fs::write(root.join(".cache/d.tgz"), b"d").expect("write hidden dir file");
        dir
    }

    fn utf8(path: &std::path::Path) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(path.to_path_buf()).expect("tempdir paths are UTF-8")
    }

    #[rstest]
    fn discovers_files_recursively_in_name_order(tree: TempDir) {
        let root = utf8(tree.path());
        let files = discover_files(&root).expect("walk tree");
        let relative: Vec<&str> = files
            .iter()
            .map(|path| path.strip_prefix(&root).expect("under root").as_str())
            .collect();
        assert_eq!(relative, vec!["anz/a.csv", "anz/b.tgz", "anz/nested/c.gz"]);
    }

    #[rstest]
    fn reports_missing_roots(tree: TempDir) {
        let root = utf8(tree.path()).join("missing");
        let err = discover_files(&root).expect_err("missing directory");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[rstest]
    fn distinguishes_directories_from_files(tree: TempDir) {
        let root = utf8(tree.path());
        assert!(path_is_dir(&root.join("anz")).expect("inspect dir"));
        assert!(!path_is_dir(&root.join("anz/a.csv")).expect("inspect file"));
    }
}

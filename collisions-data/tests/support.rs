//! Helpers for building collision archives at test time.

use std::{fs, io::Write, path::Path};

use camino::{Utf8Path, Utf8PathBuf};
use collisions_core::Field;
use flate2::{Compression, write::GzEncoder};
use tempfile::TempDir;

/// Header line naming every collision column in schema order.
pub fn header() -> String {
    Field::ALL
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join(",")
}

/// Header line with one column left out.
pub fn header_without(omitted: Field) -> String {
    Field::ALL
        .iter()
        .filter(|field| **field != omitted)
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join(",")
}

/// A data line with the given overrides; every other cell is blank.
pub fn row(cells: &[(Field, &str)]) -> String {
    row_for(Field::ALL.iter().copied(), cells)
}

/// A data line for a header that omits one column.
pub fn row_without(omitted: Field, cells: &[(Field, &str)]) -> String {
    row_for(
        Field::ALL.iter().copied().filter(|field| *field != omitted),
        cells,
    )
}

fn row_for(fields: impl Iterator<Item = Field>, cells: &[(Field, &str)]) -> String {
    fields
        .map(|field| {
            cells
                .iter()
                .find(|(candidate, _)| *candidate == field)
                .map_or("", |(_, value)| *value)
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// A CSV document made of a header line and data lines.
pub fn csv_document(header: &str, rows: &[String]) -> String {
    let mut document = String::from(header);
    document.push('\n');
    for line in rows {
        document.push_str(line);
        document.push('\n');
    }
    document
}

/// Write a gzip-compressed tarball holding `members` (path, contents) to
/// `path`, creating parent directories as needed.
pub fn write_archive(path: &Utf8Path, members: &[(&str, &str)]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .unwrap_or_else(|err| panic!("failed to create {parent}: {err}"));
    }
    let file = fs::File::create(path)
        .unwrap_or_else(|err| panic!("failed to create archive {path}: {err}"));
    let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));
    for (name, contents) in members {
        let mut header = tar::Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, name, contents.as_bytes())
            .unwrap_or_else(|err| panic!("failed to append {name} to {path}: {err}"));
    }
    let encoder = builder
        .into_inner()
        .unwrap_or_else(|err| panic!("failed to finish archive {path}: {err}"));
    let mut file = encoder
        .finish()
        .unwrap_or_else(|err| panic!("failed to compress archive {path}: {err}"));
    file.flush()
        .unwrap_or_else(|err| panic!("failed to flush archive {path}: {err}"));
}

/// Write a plain file, creating parent directories as needed.
pub fn write_file(path: &Utf8Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .unwrap_or_else(|err| panic!("failed to create {parent}: {err}"));
    }
    fs::write(path, contents).unwrap_or_else(|err| panic!("failed to write {path}: {err}"));
}

/// UTF-8 view of a temporary directory.
pub fn utf8_root(dir: &TempDir) -> Utf8PathBuf {
    utf8(dir.path())
}

/// Convert a path known to be UTF-8.
pub fn utf8(path: &Path) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(path.to_path_buf())
        .unwrap_or_else(|path| panic!("path {path:?} is not UTF-8"))
}

//! Test helpers for composing resource trees of collision archives.

use camino::{Utf8Path, Utf8PathBuf};
use collisions_core::Field;
use flate2::{Compression, write::GzEncoder};
use std::fs;
use tempfile::TempDir;

/// A scratch resource root holding generated archives.
pub(super) struct ResourceTree {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl ResourceTree {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Write `region/name` as an archive holding one CSV with `rows`, each
    /// given as `(state, year, fatalities)`.
    pub(super) fn add_archive(&self, region: &str, name: &str, rows: &[(&str, &str, &str)]) {
        let mut document = Field::ALL
            .iter()
            .map(|field| field.name())
            .collect::<Vec<_>>()
            .join(",");
        document.push('\n');
        for (index, (state, year, fatalities)) in rows.iter().enumerate() {
            let cells: Vec<String> = Field::ALL
                .iter()
                .map(|field| match field {
                    Field::CrashId => format!("{name}-{index}"),
                    Field::State => (*state).to_owned(),
                    Field::Year => (*year).to_owned(),
                    Field::Fatalities => (*fatalities).to_owned(),
                    _ => String::new(),
                })
                .collect();
            document.push_str(&cells.join(","));
            document.push('\n');
        }
        write_archive(&self.root.join(region).join(name), "collisions.csv", &document);
    }
}

fn write_archive(path: &Utf8Path, member: &str, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create archive directory");
    }
    let file = fs::File::create(path).expect("create archive");
    let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));
    let mut header = tar::Header::new_gnu();
    header.set_size(contents.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();
    builder
        .append_data(&mut header, member, contents.as_bytes())
        .expect("append member");
    builder
        .into_inner()
        .expect("finish tarball")
        .finish()
        .expect("finish gzip stream");
}

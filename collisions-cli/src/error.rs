//! Error types emitted by the road collisions CLI.

use std::{io, sync::Arc};

use camino::Utf8PathBuf;
use collisions_core::UnknownFieldError;
use collisions_data::LoadError;
use thiserror::Error;

/// Errors emitted by the road collisions CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A `--where` expression was not of the form `field=value`.
    #[error("invalid filter {expression:?} (expected field=value)")]
    InvalidFilter { expression: String },
    /// A `--where` expression named a column that collisions do not have.
    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),
    /// The resource directory does not exist.
    #[error("resource directory {path:?} does not exist (set --resources-dir or {env})")]
    MissingResources {
        path: Utf8PathBuf,
        env: &'static str,
    },
    /// The resource path exists but is not a directory.
    #[error("resource path {path:?} is not a directory")]
    ResourcesNotDirectory { path: Utf8PathBuf },
    /// The resource path could not be inspected.
    #[error("failed to inspect resource directory {path:?}: {source}")]
    InspectResources {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    /// Loading the collision archives failed.
    #[error("failed to load collisions: {0}")]
    Load(#[from] LoadError),
    /// Serialising the matching records failed.
    #[error("failed to serialise collisions: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing the query output failed.
    #[error("failed to write query output: {0}")]
    WriteOutput(#[source] io::Error),
}

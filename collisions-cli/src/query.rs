//! Query command implementation for the road collisions CLI.

use std::io::{self, Write};

use camino::Utf8PathBuf;
use clap::Parser;
use collisions_core::{CollisionFilter, Collisions, FieldValue};
use collisions_data::{DEFAULT_REGION, RESOURCES_ENV, ResourceRoot};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_JSON, ARG_REGION, ARG_RESOURCES_DIR, ARG_WHERE, CliError};

/// CLI arguments for the `query` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load every archive for a region and report the collisions \
                 whose columns equal the given values. The resource directory \
                 can come from CLI flags, configuration files, or the \
                 ROAD_COLLISIONS_RESOURCES environment variable.",
    about = "Count or print collisions matching field filters"
)]
#[ortho_config(prefix = "ROAD_COLLISIONS")]
pub(crate) struct QueryArgs {
    /// Directory holding one subdirectory of archives per region.
    #[arg(long = ARG_RESOURCES_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) resources_dir: Option<Utf8PathBuf>,
    /// Region subdirectory to load (defaults to `anz`).
    #[arg(long = ARG_REGION, value_name = "name")]
    #[serde(default)]
    pub(crate) region: Option<String>,
    /// Keep collisions whose column equals the value; repeatable.
    #[arg(long = ARG_WHERE, value_name = "field=value")]
    #[serde(default)]
    pub(crate) filters: Vec<String>,
    /// Print the matching records as JSON instead of a count.
    #[arg(long = ARG_JSON)]
    #[serde(default)]
    pub(crate) json: bool,
}

impl QueryArgs {
    pub(crate) fn into_config(self) -> Result<QueryConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        QueryConfig::try_from(merged)
    }
}

/// Resolved `query` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct QueryConfig {
    /// Root holding the per-region archive directories.
    pub(crate) resources: ResourceRoot,
    /// Region subdirectory to load.
    pub(crate) region: String,
    /// Conjunction of `--where` constraints.
    pub(crate) filter: CollisionFilter,
    pub(crate) json: bool,
}

impl QueryConfig {
    /// Check that the resource root is an existing directory.
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let path = self.resources.path();
        match collisions_fs::path_is_dir(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::ResourcesNotDirectory {
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                Err(CliError::MissingResources {
                    path: path.to_path_buf(),
                    env: RESOURCES_ENV,
                })
            }
            Err(source) => Err(CliError::InspectResources {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<QueryArgs> for QueryConfig {
    type Error = CliError;

    fn try_from(args: QueryArgs) -> Result<Self, Self::Error> {
        let resources = args
            .resources_dir
            .map_or_else(ResourceRoot::resolve, ResourceRoot::new);
        let region = args
            .region
            .filter(|region| !region.is_empty())
            .unwrap_or_else(|| DEFAULT_REGION.to_owned());
        let pairs = args
            .filters
            .iter()
            .map(|expression| parse_filter(expression))
            .collect::<Result<Vec<_>, _>>()?;
        let filter = CollisionFilter::from_names(pairs)?;
        Ok(Self {
            resources,
            region,
            filter,
            json: args.json,
        })
    }
}

/// Split `field=value` at the first `=` and infer the value like a CSV cell.
pub(crate) fn parse_filter(expression: &str) -> Result<(&str, FieldValue), CliError> {
    match expression.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => {
            Ok((field.trim(), FieldValue::infer(value)))
        }
        _ => Err(CliError::InvalidFilter {
            expression: expression.to_owned(),
        }),
    }
}

pub(crate) fn run_query(args: QueryArgs) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    run_query_with(args, &mut stdout)
}

pub(crate) fn run_query_with(args: QueryArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_query_config(args)?;
    let matches = execute_query(&config)?;
    write_query_output(writer, &matches, config.json)
}

fn resolve_query_config(args: QueryArgs) -> Result<QueryConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_query(config: &QueryConfig) -> Result<Collisions, CliError> {
    let collisions = config.resources.load_region(&config.region)?;
    Ok(collisions.filter(&config.filter))
}

fn write_query_output(
    writer: &mut dyn Write,
    matches: &Collisions,
    json: bool,
) -> Result<(), CliError> {
    if json {
        let payload = serde_json::to_string_pretty(&matches.serialize())
            .map_err(CliError::SerializeOutput)?;
        writer
            .write_all(payload.as_bytes())
            .map_err(CliError::WriteOutput)?;
        writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    } else {
        writeln!(writer, "{}", matches.len()).map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::cli::CliArgs;
use crate::config::model::{RawGeneratorConfig, RunConfig};
use crate::errors::Result;

/// Load a parameter file from a given path and return the raw layer.
///
/// This only performs TOML deserialization; it does **not** perform range
/// validation. Use [`resolve_run_config`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawGeneratorConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawGeneratorConfig = toml::from_str(&contents)?;

    Ok(config)
}

/// Build the [`RunConfig`] for one invocation.
///
/// Layers, lowest priority first:
///
/// - built-in defaults,
/// - the `--config` TOML file, if given,
/// - flags on the command line.
pub fn resolve_run_config(args: &CliArgs) -> Result<RunConfig> {
    let file_layer = match args.config {
        Some(ref path) => load_from_path(path)?,
        None => RawGeneratorConfig::default(),
    };

    let raw = file_layer.merge(args.to_raw());
    RunConfig::try_from(raw)
}

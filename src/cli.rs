// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Every generation parameter is optional here: values left unset fall back
//! to the `--config` file (if any) and then to built-in defaults. See
//! [`crate::config::RawGeneratorConfig::merge`].

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::RawGeneratorConfig;

/// Command-line arguments for `daggen`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "daggen",
    version,
    about = "Generate random leveled task DAGs for workflow schedulers and simulators.",
    long_about = None
)]
pub struct CliArgs {
    /// Number of tasks in the graph.
    #[arg(short = 'n', value_name = "N")]
    pub n: Option<usize>,

    /// Output file. Defaults to stdout.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// DAG shape: 1.0 is fat (maximum parallelism), 0.0 is thin.
    #[arg(long, value_name = "F")]
    pub fat: Option<f64>,

    /// Dependency density: 0.0 is minimal, 1.0 is a full graph.
    #[arg(long, value_name = "F")]
    pub density: Option<f64>,

    /// Regularity of the number of tasks per level: 1.0 is perfectly regular.
    #[arg(long, value_name = "F")]
    pub regular: Option<f64>,

    /// Communication (MBytes) to computation (sec) ratio.
    #[arg(long, value_name = "N")]
    pub ccr: Option<u32>,

    /// Minimum data size.
    #[arg(long, value_name = "N")]
    pub mindata: Option<u64>,

    /// Maximum data size.
    #[arg(long, value_name = "N")]
    pub maxdata: Option<u64>,

    /// Minimum Amdahl's law parameter value.
    #[arg(long, value_name = "F")]
    pub minalpha: Option<f64>,

    /// Maximum Amdahl's law parameter value.
    #[arg(long, value_name = "F")]
    pub maxalpha: Option<f64>,

    /// Number of levels spanned by communications (1: perfectly synchronized levels).
    #[arg(long, value_name = "N")]
    pub jump: Option<usize>,

    /// Output the generated DAG in the DOT format.
    #[arg(long)]
    pub dot: bool,

    /// Seed for the random generator, for reproducible graphs.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Optional TOML file with generation parameters.
    ///
    /// Flags given on the command line take precedence over the file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DAGGEN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl CliArgs {
    /// Parameters given on the command line, as a raw (unvalidated) layer.
    pub fn to_raw(&self) -> RawGeneratorConfig {
        RawGeneratorConfig {
            n: self.n,
            fat: self.fat,
            density: self.density,
            regular: self.regular,
            ccr: self.ccr,
            mindata: self.mindata,
            maxdata: self.maxdata,
            minalpha: self.minalpha,
            maxalpha: self.maxalpha,
            jump: self.jump,
            // `--dot` is a switch: absence means "not given", not "false".
            dot: self.dot.then_some(true),
            output: self.output.clone(),
            seed: self.seed,
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

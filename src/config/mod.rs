// src/config/mod.rs

//! Configuration for a generation run.
//!
//! Responsibilities:
//! - Define the raw (layered) and validated parameter records (`model.rs`).
//! - Load an optional TOML parameter file and merge it with CLI flags (`loader.rs`).
//! - Validate parameter ranges (`validate.rs`).
//! - Open the output sink (`output.rs`).

pub mod loader;
pub mod model;
pub mod output;
pub mod validate;

pub use loader::{load_from_path, resolve_run_config};
pub use model::{GeneratorConfig, OutputFormat, OutputTarget, RawGeneratorConfig, RunConfig};
pub use validate::validate_generator_config;

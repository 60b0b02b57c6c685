// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod output;
pub mod random;

use std::io::Write;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{RunConfig, resolve_run_config};
use crate::dag::{Dag, generate};
use crate::errors::Result;
use crate::output::write_dag;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config resolution (defaults, `--config` file, CLI flags)
/// - DAG generation
/// - serialization to the selected sink
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = resolve_run_config(&args)?;
    let dag = generate_dag(&cfg);

    let mut sink = cfg.output.open()?;
    write_run(&cfg, &dag, &mut sink)?;
    sink.flush()?;

    debug!("output flushed");
    Ok(())
}

/// Generate the DAG for `cfg`, seeded from `cfg.seed` when set.
pub fn generate_dag(cfg: &RunConfig) -> Dag {
    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate(&cfg.generator, &mut rng)
}

/// Serialize `dag` in the format `cfg` selects.
pub fn write_run<W: Write + ?Sized>(cfg: &RunConfig, dag: &Dag, out: &mut W) -> Result<()> {
    info!(
        levels = dag.num_levels(),
        tasks = dag.num_tasks(),
        transfers = dag.num_transfers(),
        format = ?cfg.format,
        "writing DAG"
    );
    write_dag(dag, cfg.format, out)?;
    Ok(())
}

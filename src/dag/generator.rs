// src/dag/generator.rs

use rand::Rng;
use tracing::debug;

use crate::config::model::GeneratorConfig;
use crate::dag::model::{Dag, Task, TaskId};
use crate::random::{between, int_around};

/// Bytes per data element when transfer costs are derived from data sizes.
const BYTES_PER_ELEMENT: f64 = 8.0;

/// Asymptotic complexity a task's cost is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    N2,
    NLogN,
    N3,
}

impl Complexity {
    fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.gen_range(0..3) {
            0 => Complexity::N2,
            1 => Complexity::NLogN,
            _ => Complexity::N3,
        }
    }

    /// Operation count for `data_size` elements, `op` operations per unit.
    pub fn cost(self, data_size: u64, op: f64) -> f64 {
        let d = data_size as f64;
        match self {
            Complexity::N2 => op * d.powi(2),
            Complexity::NLogN => 2.0 * op * d.powi(2) * d.log2(),
            Complexity::N3 => op * d.powf(1.5),
        }
    }
}

/// Generate a random leveled DAG with `cfg.n` tasks.
///
/// Levels are filled first, then each task beyond the first level draws its
/// parents from up to `cfg.jump` levels above it. Every edge points to a
/// strictly later level and no level is empty.
pub fn generate<R: Rng + ?Sized>(cfg: &GeneratorConfig, rng: &mut R) -> Dag {
    let mut dag = Dag::new();

    for width in level_widths(cfg, rng) {
        let tasks = (0..width).map(|_| random_task(cfg, rng)).collect();
        dag.push_level(tasks);
    }

    connect_levels(&mut dag, cfg, rng);

    debug!(
        levels = dag.num_levels(),
        tasks = dag.num_tasks(),
        transfers = dag.num_transfers(),
        "generated DAG topology"
    );
    dag
}

/// Number of tasks in each level. The widths sum to exactly `cfg.n` and
/// every width is at least 1.
pub fn level_widths<R: Rng + ?Sized>(cfg: &GeneratorConfig, rng: &mut R) -> Vec<usize> {
    let ideal = ((cfg.n as f64).powf(cfg.fat) as usize).max(1);
    let perc = 100.0 - 100.0 * cfg.regular;

    let mut widths = Vec::new();
    let mut total = 0;
    while total < cfg.n {
        let width = int_around(rng, ideal, perc).min(cfg.n - total);
        widths.push(width);
        total += width;
    }

    debug!(ideal, levels = widths.len(), "computed level widths");
    widths
}

fn random_task<R: Rng + ?Sized>(cfg: &GeneratorConfig, rng: &mut R) -> Task {
    let raw = between(rng, cfg.mindata as f64, cfg.maxdata as f64) as u64;
    // Round down to a multiple of 1024, but never to an empty task.
    let data_size = ((raw / 1024) * 1024).max(1);

    let complexity = Complexity::pick(rng);
    let op = between(rng, 64.0, 512.0);
    let alpha = between(rng, cfg.minalpha, cfg.maxalpha);

    Task::new(complexity.cost(data_size, op), data_size, alpha)
}

fn connect_levels<R: Rng + ?Sized>(dag: &mut Dag, cfg: &GeneratorConfig, rng: &mut R) {
    for level in 1..dag.num_levels() {
        let prev_width = dag.level(level - 1).len();
        if prev_width == 0 {
            continue;
        }

        for index in 0..dag.level(level).len() {
            let child = TaskId::new(level, index);
            let draws = (1 + between(rng, 0.0, cfg.density * prev_width as f64) as usize)
                .min(prev_width);

            for _ in 0..draws {
                let span = between(rng, 1.0, cfg.jump as f64 + 1.0) as usize;
                let parent_level = level.saturating_sub(span.max(1));
                let parent_width = dag.level(parent_level).len();
                if parent_width == 0 {
                    continue;
                }
                let parent_index =
                    (between(rng, 0.0, parent_width as f64) as usize).min(parent_width - 1);
                let parent = TaskId::new(parent_level, parent_index);

                if let Some(task) = dag.task_mut(parent) {
                    if task.has_child(child) {
                        continue;
                    }
                    let comm_cost = transfer_cost(cfg, task);
                    task.push_transfer(child, comm_cost);
                }
            }
        }
    }
}

/// Cost of a transfer out of `parent`.
///
/// With `ccr == 0` the cost is the parent's data volume in bytes; otherwise
/// it is `ccr` times the parent's computation cost.
pub fn transfer_cost(cfg: &GeneratorConfig, parent: &Task) -> f64 {
    if cfg.ccr == 0 {
        parent.data_size as f64 * BYTES_PER_ELEMENT
    } else {
        f64::from(cfg.ccr) * parent.cost
    }
}

use std::error::Error;

use daggen::config::GeneratorConfig;
use daggen::dag::{Complexity, Dag, TaskId, generate, level_widths};
use daggen::random::{between, int_around};
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

type TestResult = Result<(), Box<dyn Error>>;

fn config_strategy() -> impl Strategy<Value = GeneratorConfig> {
    (
        1..120usize,
        0.0..=1.0f64,
        0.0..=1.0f64,
        0.0..=1.0f64,
        0..4u32,
        1..4usize,
        0.0..0.5f64,
    )
        .prop_map(|(n, fat, density, regular, ccr, jump, minalpha)| GeneratorConfig {
            n,
            fat,
            density,
            regular,
            ccr,
            jump,
            minalpha,
            maxalpha: minalpha + 0.2,
            ..GeneratorConfig::default()
        })
}

fn as_petgraph(dag: &Dag) -> DiGraphMap<TaskId, ()> {
    let mut graph = DiGraphMap::new();
    for (id, task) in dag.tasks() {
        graph.add_node(id);
        for child in task.children() {
            graph.add_edge(id, child, ());
        }
    }
    graph
}

proptest! {
    #[test]
    fn levels_partition_exactly_n_tasks(cfg in config_strategy(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let widths = level_widths(&cfg, &mut rng);

        prop_assert_eq!(widths.iter().sum::<usize>(), cfg.n);
        prop_assert!(widths.iter().all(|&w| w >= 1));
    }

    #[test]
    fn edges_point_forward_within_jump(cfg in config_strategy(), seed in any::<u64>()) {
        let dag = generate(&cfg, &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(dag.num_tasks(), cfg.n);
        for (id, task) in dag.tasks() {
            let mut seen = Vec::new();
            for child in task.children() {
                prop_assert!(dag.task(child).is_some());
                prop_assert!(child.level > id.level);
                prop_assert!(child.level - id.level <= cfg.jump);
                prop_assert!(!seen.contains(&child), "duplicate edge {} -> {}", id, child);
                seen.push(child);
            }
        }
    }

    #[test]
    fn generated_dags_are_acyclic(cfg in config_strategy(), seed in any::<u64>()) {
        let dag = generate(&cfg, &mut StdRng::seed_from_u64(seed));
        prop_assert!(toposort(&as_petgraph(&dag), None).is_ok());
    }

    #[test]
    fn every_task_below_the_first_level_has_a_parent(cfg in config_strategy(), seed in any::<u64>()) {
        let dag = generate(&cfg, &mut StdRng::seed_from_u64(seed));
        let graph = as_petgraph(&dag);

        for (id, _) in dag.tasks().filter(|(id, _)| id.level > 0) {
            let parents = graph.neighbors_directed(id, petgraph::Direction::Incoming).count();
            prop_assert!(parents >= 1, "task {} has no parent", id);
        }
    }

    #[test]
    fn last_level_tasks_are_sinks(cfg in config_strategy(), seed in any::<u64>()) {
        let dag = generate(&cfg, &mut StdRng::seed_from_u64(seed));
        let last = dag.last_level().unwrap();
        prop_assert!(dag.level(last).iter().all(|t| t.is_sink()));
    }

    #[test]
    fn task_weights_respect_bounds(cfg in config_strategy(), seed in any::<u64>()) {
        let dag = generate(&cfg, &mut StdRng::seed_from_u64(seed));

        for (_, task) in dag.tasks() {
            prop_assert!(task.cost.is_finite() && task.cost >= 0.0);
            prop_assert_eq!(task.data_size % 1024, 0);
            prop_assert!(task.data_size >= cfg.mindata - cfg.mindata % 1024);
            prop_assert!(task.data_size <= cfg.maxdata);
            prop_assert!(task.alpha >= cfg.minalpha && task.alpha <= cfg.maxalpha);
            prop_assert!(task.comm_costs().all(|c| c.is_finite() && c >= 0.0));
        }
    }

    #[test]
    fn int_around_is_strictly_positive(x in 0..10_000usize, perc in 0.0..200.0f64, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert!(int_around(&mut rng, x, perc) >= 1);
    }

    #[test]
    fn between_stays_in_half_open_range(x in -1e6..1e6f64, width in 1e-3..1e6f64, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let v = between(&mut rng, x, x + width);
        prop_assert!(v >= x && v <= x + width);
    }
}

#[test]
fn same_seed_same_dag() {
    let cfg = GeneratorConfig::default();

    let a = generate(&cfg, &mut StdRng::seed_from_u64(7));
    let b = generate(&cfg, &mut StdRng::seed_from_u64(7));

    assert_eq!(a, b);
}

#[test]
fn fat_one_gives_a_single_level_with_perfect_regularity() {
    let cfg = GeneratorConfig {
        n: 40,
        fat: 1.0,
        regular: 1.0,
        ..GeneratorConfig::default()
    };

    let dag = generate(&cfg, &mut StdRng::seed_from_u64(1));

    assert_eq!(dag.num_levels(), 1);
    assert_eq!(dag.num_transfers(), 0);
}

#[test]
fn fat_zero_gives_a_chain() {
    let cfg = GeneratorConfig {
        n: 12,
        fat: 0.0,
        regular: 1.0,
        ..GeneratorConfig::default()
    };

    let dag = generate(&cfg, &mut StdRng::seed_from_u64(3));

    assert_eq!(dag.num_levels(), 12);
    assert!(dag.levels().iter().all(|level| level.len() == 1));
    // jump = 1 and one task per level: exactly one edge between consecutive levels.
    assert_eq!(dag.num_transfers(), 11);
}

#[test]
fn equal_bounds_are_returned_as_is() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(between(&mut rng, 0.2, 0.2), 0.2);
    assert_eq!(int_around(&mut rng, 5, 0.0), 5);
}

#[test]
fn transfer_costs_follow_ccr() -> TestResult {
    let mut cfg = GeneratorConfig {
        n: 30,
        fat: 0.3,
        ..GeneratorConfig::default()
    };

    let dag = generate(&cfg, &mut StdRng::seed_from_u64(11));
    for (_, task) in dag.tasks() {
        for cost in task.comm_costs() {
            assert_eq!(cost, task.data_size as f64 * 8.0);
        }
    }

    cfg.ccr = 2;
    let dag = generate(&cfg, &mut StdRng::seed_from_u64(11));
    let mut checked = 0;
    for (_, task) in dag.tasks() {
        for cost in task.comm_costs() {
            assert_eq!(cost, task.cost * 2.0);
            checked += 1;
        }
    }
    if checked == 0 {
        return Err("expected at least one transfer".into());
    }
    Ok(())
}

#[test]
fn complexity_costs() {
    assert_eq!(Complexity::N2.cost(1024, 2.0), 2.0 * 1024.0 * 1024.0);
    assert!((Complexity::NLogN.cost(1024, 1.0) - 2.0 * 1024.0 * 1024.0 * 10.0).abs() < 1e-3);
    assert!((Complexity::N3.cost(1024, 1.0) - 32768.0).abs() < 1e-6);
    assert_eq!(Complexity::NLogN.cost(1, 100.0), 0.0);
}

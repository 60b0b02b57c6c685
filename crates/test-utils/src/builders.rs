#![allow(dead_code)]

use daggen::dag::{Dag, Task, TaskId};

/// Builder for `Dag` to simplify test setup.
///
/// Tasks are added to the current (last opened) level; edges are recorded
/// by position and applied on `build`, so they may point at tasks added
/// later.
pub struct DagBuilder {
    levels: Vec<Vec<Task>>,
    edges: Vec<(TaskId, TaskId, f64)>,
}

impl DagBuilder {
    pub fn new() -> Self {
        Self {
            levels: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Open a new, initially empty level.
    pub fn level(mut self) -> Self {
        self.levels.push(Vec::new());
        self
    }

    /// Add a task to the current level.
    pub fn task(mut self, cost: f64, alpha: f64) -> Self {
        if self.levels.is_empty() {
            self.levels.push(Vec::new());
        }
        let level = self.levels.last_mut().expect("a level was just ensured");
        level.push(Task::new(cost, 1024, alpha));
        self
    }

    /// Add a transfer edge `(level, index) -> (level, index)`.
    pub fn edge(mut self, from: (usize, usize), to: (usize, usize), comm_cost: f64) -> Self {
        self.edges.push((
            TaskId::new(from.0, from.1),
            TaskId::new(to.0, to.1),
            comm_cost,
        ));
        self
    }

    pub fn build(self) -> Dag {
        let mut dag = Dag::from_levels(self.levels);
        for (from, to, comm_cost) in self.edges {
            dag.task_mut(from)
                .unwrap_or_else(|| panic!("edge source {from} does not exist"))
                .push_transfer(to, comm_cost);
        }
        dag
    }
}

impl Default for DagBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Two levels: tasks 0:0 and 0:1 both feed 1:0, 0:0 also feeds 1:1.
pub fn diamond() -> Dag {
    DagBuilder::new()
        .level()
        .task(100.0, 0.1)
        .task(200.0, 0.2)
        .level()
        .task(300.0, 0.05)
        .task(400.0, 0.15)
        .edge((0, 0), (1, 0), 10.0)
        .edge((0, 0), (1, 1), 20.0)
        .edge((0, 1), (1, 0), 30.0)
        .build()
}

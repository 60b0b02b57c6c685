// src/dag/model.rs

use std::fmt;

/// Position of a task in a [`Dag`]: its level and its index within that level.
///
/// Children are referenced by `TaskId` rather than by pointer; ownership of
/// every task is its level membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId {
    pub level: usize,
    pub index: usize,
}

impl TaskId {
    pub fn new(level: usize, index: usize) -> Self {
        Self { level, index }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.level, self.index)
    }
}

/// An outgoing data-transfer edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transfer {
    /// Receiving task. Always in a strictly later level than the sender.
    pub child: TaskId,
    /// Cost of the transfer.
    pub comm_cost: f64,
}

/// A computational unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Computation time (non-negative).
    pub cost: f64,
    /// Data volume the task works on.
    pub data_size: u64,
    /// Amdahl's law parallelization coefficient.
    pub alpha: f64,
    /// Outgoing transfers, in construction order. The order is significant
    /// for serialization and is never re-sorted.
    transfers: Vec<Transfer>,
}

impl Task {
    pub fn new(cost: f64, data_size: u64, alpha: f64) -> Self {
        Self {
            cost,
            data_size,
            alpha,
            transfers: Vec::new(),
        }
    }

    /// Append a transfer edge to `child`.
    pub fn push_transfer(&mut self, child: TaskId, comm_cost: f64) {
        self.transfers.push(Transfer { child, comm_cost });
    }

    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    /// Children in edge order.
    pub fn children(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.transfers.iter().map(|t| t.child)
    }

    /// Per-edge communication costs, index-aligned with [`Task::children`].
    pub fn comm_costs(&self) -> impl Iterator<Item = f64> + '_ {
        self.transfers.iter().map(|t| t.comm_cost)
    }

    pub fn has_child(&self, child: TaskId) -> bool {
        self.transfers.iter().any(|t| t.child == child)
    }

    pub fn is_sink(&self) -> bool {
        self.transfers.is_empty()
    }
}

/// Leveled task graph: an ordered sequence of levels, each an ordered
/// sequence of tasks.
///
/// The graph does not check that edges point to later levels or that the
/// referenced children exist; whoever builds it is responsible for that.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dag {
    levels: Vec<Vec<Task>>,
}

impl Dag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_levels(levels: Vec<Vec<Task>>) -> Self {
        Self { levels }
    }

    /// Append a level and return its index.
    pub fn push_level(&mut self, tasks: Vec<Task>) -> usize {
        self.levels.push(tasks);
        self.levels.len() - 1
    }

    pub fn levels(&self) -> &[Vec<Task>] {
        &self.levels
    }

    /// Tasks of one level; empty for an out-of-range index.
    pub fn level(&self, level: usize) -> &[Task] {
        self.levels.get(level).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.levels.get(id.level)?.get(id.index)
    }

    pub fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.levels.get_mut(id.level)?.get_mut(id.index)
    }

    /// All tasks in level-then-task order.
    pub fn tasks(&self) -> impl Iterator<Item = (TaskId, &Task)> + '_ {
        self.levels.iter().enumerate().flat_map(|(level, tasks)| {
            tasks
                .iter()
                .enumerate()
                .map(move |(index, task)| (TaskId::new(level, index), task))
        })
    }

    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    pub fn num_tasks(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    pub fn num_transfers(&self) -> usize {
        self.tasks().map(|(_, task)| task.transfers().len()).sum()
    }

    pub fn last_level(&self) -> Option<usize> {
        self.levels.len().checked_sub(1)
    }
}

// src/output/tags.rs

//! Integer tagging of tasks and transfers.
//!
//! Both schemes share one counter starting at 1 and walk levels in order,
//! tasks in stored order. Tags live in tables keyed by [`TaskId`]; the
//! [`Dag`] itself is never written to. Each serialization call builds its
//! own table, so the two schemes never see each other's values.

use tracing::debug;

use crate::dag::{Dag, TaskId};

/// Id of the synthetic ROOT node in the trace format.
pub const ROOT_TAG: usize = 0;

/// Tags for the trace format, where transfers are nodes of their own.
///
/// Per level, every task is tagged first, then every transfer of every task
/// in that level (task order, then edge order), before moving to the next
/// level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceTags {
    tasks: Vec<Vec<usize>>,
    transfers: Vec<Vec<Vec<usize>>>,
    end: usize,
}

impl TraceTags {
    pub fn assign(dag: &Dag) -> Self {
        let mut next = ROOT_TAG + 1;
        let mut tasks = Vec::with_capacity(dag.num_levels());
        let mut transfers = Vec::with_capacity(dag.num_levels());

        for (level, level_tasks) in dag.levels().iter().enumerate() {
            let first = next;

            let task_tags: Vec<usize> = level_tasks
                .iter()
                .map(|_| {
                    let tag = next;
                    next += 1;
                    tag
                })
                .collect();

            let transfer_tags: Vec<Vec<usize>> = level_tasks
                .iter()
                .map(|task| {
                    task.transfers()
                        .iter()
                        .map(|_| {
                            let tag = next;
                            next += 1;
                            tag
                        })
                        .collect()
                })
                .collect();

            debug!(level, first, last = next - 1, "tagged trace level");
            tasks.push(task_tags);
            transfers.push(transfer_tags);
        }

        Self {
            tasks,
            transfers,
            end: next,
        }
    }

    /// Tag of a task. Panics if `id` is not part of the tagged DAG.
    pub fn task(&self, id: TaskId) -> usize {
        self.tasks[id.level][id.index]
    }

    /// Tags of a task's transfers, index-aligned with its edges.
    pub fn transfers_of(&self, id: TaskId) -> &[usize] {
        &self.transfers[id.level][id.index]
    }

    pub fn transfer(&self, id: TaskId, edge: usize) -> usize {
        self.transfers_of(id)[edge]
    }

    pub fn root(&self) -> usize {
        ROOT_TAG
    }

    /// Id of the synthetic END node: one past the last tagged node.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Total number of nodes, ROOT and END included.
    pub fn node_count(&self) -> usize {
        self.end + 1
    }
}

/// Tags for the graph format: tasks only, edges are plain task-to-task
/// references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphTags {
    tasks: Vec<Vec<usize>>,
    next: usize,
}

impl GraphTags {
    pub fn assign(dag: &Dag) -> Self {
        let mut next = 1;
        let tasks = dag
            .levels()
            .iter()
            .map(|level| {
                level
                    .iter()
                    .map(|_| {
                        let tag = next;
                        next += 1;
                        tag
                    })
                    .collect()
            })
            .collect();

        Self { tasks, next }
    }

    /// Tag of a task. Panics if `id` is not part of the tagged DAG.
    pub fn task(&self, id: TaskId) -> usize {
        self.tasks[id.level][id.index]
    }

    /// Number of tagged tasks.
    pub fn len(&self) -> usize {
        self.next - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

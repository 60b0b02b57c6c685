// src/output/trace.rs

//! Flat trace format.
//!
//! ```text
//! NODE_COUNT <count>
//! NODE 0 <succ,...> ROOT 0.0 0.0
//! NODE <id> <succ,...> COMPUTATION <cost> <alpha>
//! NODE <id> <succ> TRANSFER <comm cost> 0.0
//! NODE <end> - END 0.0 0.0
//! ```
//!
//! Transfers are nodes in their own right: a task's successors are its
//! transfer nodes, and each transfer node's successor is the receiving task.

use std::io::{self, Write};

use tracing::warn;

use crate::dag::{Dag, Task, TaskId};
use crate::output::tags::TraceTags;

/// Tag `dag` with the trace scheme and write it to `out`.
pub fn write_trace<W: Write + ?Sized>(dag: &Dag, out: &mut W) -> io::Result<()> {
    let tags = TraceTags::assign(dag);
    write_trace_tagged(dag, &tags, out)
}

/// Write `dag` using precomputed `tags`.
pub fn write_trace_tagged<W: Write + ?Sized>(
    dag: &Dag,
    tags: &TraceTags,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "NODE_COUNT {}", tags.node_count())?;

    let entry = if dag.level(0).is_empty() {
        tags.end().to_string()
    } else {
        join_ids((0..dag.level(0).len()).map(|index| tags.task(TaskId::new(0, index))))
    };
    writeln!(out, "NODE {} {} ROOT 0.0 0.0", tags.root(), entry)?;

    if let Some(last) = dag.last_level() {
        for (level, level_tasks) in dag.levels().iter().enumerate() {
            for (index, task) in level_tasks.iter().enumerate() {
                let id = TaskId::new(level, index);
                if level == last {
                    write_last_level_task(id, task, tags, out)?;
                } else {
                    write_task(id, task, tags, out)?;
                }
            }
        }
    }

    writeln!(out, "NODE {} - END 0.0 0.0", tags.end())
}

fn write_task<W: Write + ?Sized>(
    id: TaskId,
    task: &Task,
    tags: &TraceTags,
    out: &mut W,
) -> io::Result<()> {
    let successors = if task.is_sink() {
        tags.end().to_string()
    } else {
        join_ids(tags.transfers_of(id).iter().copied())
    };
    write_computation(tags.task(id), &successors, task, out)?;

    for (edge, transfer) in task.transfers().iter().enumerate() {
        writeln!(
            out,
            "NODE {} {} TRANSFER {:.0} 0.0",
            tags.transfer(id, edge),
            tags.task(transfer.child),
            transfer.comm_cost
        )?;
    }
    Ok(())
}

/// Last-level tasks always flow into END; any recorded edges are dropped.
fn write_last_level_task<W: Write + ?Sized>(
    id: TaskId,
    task: &Task,
    tags: &TraceTags,
    out: &mut W,
) -> io::Result<()> {
    if !task.is_sink() {
        warn!(
            task = %id,
            dropped = task.transfers().len(),
            "last-level task has outgoing transfers; not emitting them"
        );
    }
    write_computation(tags.task(id), &tags.end().to_string(), task, out)
}

fn write_computation<W: Write + ?Sized>(
    tag: usize,
    successors: &str,
    task: &Task,
    out: &mut W,
) -> io::Result<()> {
    writeln!(
        out,
        "NODE {} {} COMPUTATION {:.0} {:.2}",
        tag, successors, task.cost, task.alpha
    )
}

fn join_ids(ids: impl Iterator<Item = usize>) -> String {
    ids.map(|id| id.to_string()).collect::<Vec<_>>().join(",")
}

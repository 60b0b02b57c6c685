// src/dag/mod.rs

//! Leveled DAG representation and random generation.
//!
//! - [`model`] holds the in-memory graph: levels of tasks with outgoing
//!   transfer edges.
//! - [`generator`] synthesizes a graph from a [`crate::config::GeneratorConfig`].

pub mod generator;
pub mod model;

pub use generator::{Complexity, generate, level_widths, transfer_cost};
pub use model::{Dag, Task, TaskId, Transfer};

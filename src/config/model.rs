// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

/// Generation parameters as read from a TOML file or the command line.
///
/// Every field is optional so that layers can be overlaid (see
/// [`RawGeneratorConfig::merge`]) and so that we can tell which parameters
/// were left at their built-in default.
///
/// ```toml
/// n = 200
/// fat = 0.7
/// density = 0.3
/// ccr = 2
/// jump = 2
/// dot = true
/// seed = 42
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawGeneratorConfig {
    /// Number of tasks in the graph.
    #[serde(default)]
    pub n: Option<usize>,

    /// Fatness: 0.0 gives a chain-like DAG, 1.0 a single wide level.
    #[serde(default)]
    pub fat: Option<f64>,

    /// Fraction of the previous level a task may draw parents from.
    #[serde(default)]
    pub density: Option<f64>,

    /// Regularity of the number of tasks per level.
    #[serde(default)]
    pub regular: Option<f64>,

    /// Communication to computation ratio. `0` means transfer costs are
    /// derived from data sizes instead.
    #[serde(default)]
    pub ccr: Option<u32>,

    #[serde(default)]
    pub mindata: Option<u64>,

    #[serde(default)]
    pub maxdata: Option<u64>,

    /// Lower bound of the Amdahl's law parameter.
    #[serde(default)]
    pub minalpha: Option<f64>,

    /// Upper bound of the Amdahl's law parameter.
    #[serde(default)]
    pub maxalpha: Option<f64>,

    /// Maximum number of levels an edge may span.
    #[serde(default)]
    pub jump: Option<usize>,

    /// Emit the DOT format instead of the trace format.
    #[serde(default)]
    pub dot: Option<bool>,

    /// Output file; stdout when unset.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Seed for the random generator.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RawGeneratorConfig {
    /// Overlay `other` on top of `self`: any value set in `other` wins.
    pub fn merge(self, other: RawGeneratorConfig) -> RawGeneratorConfig {
        RawGeneratorConfig {
            n: other.n.or(self.n),
            fat: other.fat.or(self.fat),
            density: other.density.or(self.density),
            regular: other.regular.or(self.regular),
            ccr: other.ccr.or(self.ccr),
            mindata: other.mindata.or(self.mindata),
            maxdata: other.maxdata.or(self.maxdata),
            minalpha: other.minalpha.or(self.minalpha),
            maxalpha: other.maxalpha.or(self.maxalpha),
            jump: other.jump.or(self.jump),
            dot: other.dot.or(self.dot),
            output: other.output.or(self.output),
            seed: other.seed.or(self.seed),
        }
    }
}

pub const DEFAULT_N: usize = 100;
pub const DEFAULT_FAT: f64 = 0.5;
pub const DEFAULT_DENSITY: f64 = 0.5;
pub const DEFAULT_REGULAR: f64 = 0.9;
pub const DEFAULT_CCR: u32 = 0;
pub const DEFAULT_MINDATA: u64 = 2048;
pub const DEFAULT_MAXDATA: u64 = 11264;
pub const DEFAULT_MINALPHA: f64 = 0.0;
pub const DEFAULT_MAXALPHA: f64 = 0.2;
pub const DEFAULT_JUMP: usize = 1;

/// Validated shape and weight parameters consumed by the generator.
///
/// Build one through `GeneratorConfig::try_from(raw)`, or start from
/// [`GeneratorConfig::default`] in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub n: usize,
    pub fat: f64,
    pub density: f64,
    pub regular: f64,
    pub ccr: u32,
    pub mindata: u64,
    pub maxdata: u64,
    pub minalpha: f64,
    pub maxalpha: f64,
    pub jump: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            n: DEFAULT_N,
            fat: DEFAULT_FAT,
            density: DEFAULT_DENSITY,
            regular: DEFAULT_REGULAR,
            ccr: DEFAULT_CCR,
            mindata: DEFAULT_MINDATA,
            maxdata: DEFAULT_MAXDATA,
            minalpha: DEFAULT_MINALPHA,
            maxalpha: DEFAULT_MAXALPHA,
            jump: DEFAULT_JUMP,
        }
    }
}

/// Which textual encoding to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Flat task-trace format with synthetic ROOT/END nodes.
    #[default]
    Trace,
    /// Graphviz `digraph`.
    Dot,
}

/// Where the serialized DAG goes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    #[default]
    Stdout,
    File(PathBuf),
}

/// Everything one generation run needs, resolved from all config layers.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub generator: GeneratorConfig,
    pub format: OutputFormat,
    pub output: OutputTarget,
    pub seed: Option<u64>,
}

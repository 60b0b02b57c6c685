// src/config/validate.rs

use tracing::warn;

use crate::config::model::{
    DEFAULT_CCR, DEFAULT_DENSITY, DEFAULT_FAT, DEFAULT_JUMP, DEFAULT_MAXALPHA,
    DEFAULT_MAXDATA, DEFAULT_MINALPHA, DEFAULT_MINDATA, DEFAULT_N, DEFAULT_REGULAR,
    GeneratorConfig, OutputFormat, OutputTarget, RawGeneratorConfig, RunConfig,
};
use crate::errors::{DaggenError, Result};

impl TryFrom<RawGeneratorConfig> for GeneratorConfig {
    type Error = DaggenError;

    fn try_from(raw: RawGeneratorConfig) -> std::result::Result<Self, Self::Error> {
        let cfg = GeneratorConfig {
            n: raw.n.unwrap_or(DEFAULT_N),
            fat: raw.fat.unwrap_or(DEFAULT_FAT),
            density: raw.density.unwrap_or(DEFAULT_DENSITY),
            regular: raw.regular.unwrap_or(DEFAULT_REGULAR),
            ccr: raw.ccr.unwrap_or(DEFAULT_CCR),
            mindata: raw.mindata.unwrap_or(DEFAULT_MINDATA),
            maxdata: raw.maxdata.unwrap_or(DEFAULT_MAXDATA),
            minalpha: raw.minalpha.unwrap_or(DEFAULT_MINALPHA),
            maxalpha: raw.maxalpha.unwrap_or(DEFAULT_MAXALPHA),
            jump: raw.jump.unwrap_or(DEFAULT_JUMP),
        };
        validate_generator_config(&cfg)?;
        Ok(cfg)
    }
}

impl TryFrom<RawGeneratorConfig> for RunConfig {
    type Error = DaggenError;

    fn try_from(raw: RawGeneratorConfig) -> std::result::Result<Self, Self::Error> {
        warn_on_defaults(&raw);

        let format = if raw.dot.unwrap_or(false) {
            OutputFormat::Dot
        } else {
            OutputFormat::Trace
        };
        let output = match raw.output.clone() {
            Some(path) => OutputTarget::File(path),
            None => OutputTarget::Stdout,
        };
        let seed = raw.seed;
        let generator = GeneratorConfig::try_from(raw)?;

        Ok(RunConfig {
            generator,
            format,
            output,
            seed,
        })
    }
}

/// Check parameter ranges.
///
/// This checks:
/// - `n >= 1` and `jump >= 1`
/// - `fat`, `density` and `regular` lie in `[0, 1]`
/// - data sizes are positive and `maxdata >= mindata`
/// - alpha bounds are non-negative and `maxalpha >= minalpha`
pub fn validate_generator_config(cfg: &GeneratorConfig) -> Result<()> {
    if cfg.n == 0 {
        return Err(invalid("n", "must be >= 1 (got 0)"));
    }

    unit_interval("fat", cfg.fat)?;
    unit_interval("density", cfg.density)?;
    unit_interval("regular", cfg.regular)?;

    if cfg.mindata == 0 {
        return Err(invalid("mindata", "must be > 0 (got 0)"));
    }
    if cfg.maxdata == 0 || cfg.maxdata < cfg.mindata {
        return Err(invalid(
            "maxdata",
            &format!("must be > 0 and >= mindata {} (got {})", cfg.mindata, cfg.maxdata),
        ));
    }

    if !cfg.minalpha.is_finite() || cfg.minalpha < 0.0 {
        return Err(invalid(
            "minalpha",
            &format!("must be >= 0 (got {})", cfg.minalpha),
        ));
    }
    if !cfg.maxalpha.is_finite() || cfg.maxalpha < cfg.minalpha {
        return Err(invalid(
            "maxalpha",
            &format!(
                "must be >= 0 and >= minalpha {} (got {})",
                cfg.minalpha, cfg.maxalpha
            ),
        ));
    }

    if cfg.jump == 0 {
        return Err(invalid("jump", "must be >= 1 (got 0)"));
    }

    Ok(())
}

fn unit_interval(name: &str, value: f64) -> Result<()> {
    // NaN fails both comparisons, so test the accepted range directly.
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(name, &format!("must be within [0, 1] (got {value})")))
    }
}

fn invalid(name: &str, reason: &str) -> DaggenError {
    DaggenError::ConfigError(format!("invalid {name} value: {reason}"))
}

fn warn_on_defaults(raw: &RawGeneratorConfig) {
    if raw.n.is_none() {
        warn!("using default n value ({DEFAULT_N})");
    }
    if raw.output.is_none() {
        warn!("sending output to stdout");
    }
    if raw.jump.is_none() {
        warn!("using default jump value ({DEFAULT_JUMP})");
    }
    if raw.fat.is_none() {
        warn!("using default fat value ({DEFAULT_FAT})");
    }
    if raw.density.is_none() {
        warn!("using default density value ({DEFAULT_DENSITY})");
    }
    if raw.ccr.is_none() {
        warn!("using default ccr value ({DEFAULT_CCR})");
    }
    if raw.mindata.is_none() {
        warn!("using default mindata value ({DEFAULT_MINDATA})");
    }
    if raw.maxdata.is_none() {
        warn!("using default maxdata value ({DEFAULT_MAXDATA})");
    }
    if raw.minalpha.is_none() {
        warn!("using default minalpha value ({DEFAULT_MINALPHA})");
    }
    if raw.maxalpha.is_none() {
        warn!("using default maxalpha value ({DEFAULT_MAXALPHA})");
    }
    if raw.regular.is_none() {
        warn!("using default regular value ({DEFAULT_REGULAR})");
    }
}

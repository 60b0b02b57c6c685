// src/random.rs

//! Random perturbation helpers used by the generator.

use rand::Rng;
use rand::distributions::Standard;

/// A strictly positive integer around `x`, perturbed by up to `perc` percent.
///
/// The perturbation is drawn uniformly in `[-perc, perc)` and the result is
/// truncated, then clamped to at least 1.
pub fn int_around<R: Rng + ?Sized>(rng: &mut R, x: usize, perc: f64) -> usize {
    let u: f64 = rng.sample(Standard);
    let r = -perc + 2.0 * perc * u;
    let value = (x as f64 * (1.0 + r / 100.0)) as i64;
    value.max(1) as usize
}

/// A value drawn uniformly in `[x, y)`. Returns `x` when the bounds are equal.
pub fn between<R: Rng + ?Sized>(rng: &mut R, x: f64, y: f64) -> f64 {
    let u: f64 = rng.sample(Standard);
    x + (y - x) * u
}

// src/nn/init.rs

use crate::config::Config;
use crate::value::Value;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

/// Builds the random generator used for parameter initialisation.
///
/// Seeded from `config.seed()` when present, so two models built from the same
/// config get identical parameters; otherwise seeded from OS entropy.
pub fn rng_from_config(config: &Config) -> StdRng {
    match config.seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// `n` fresh leaves drawn from `U(-1, 1) * scale`.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, n: usize, scale: f64) -> Vec<Value> {
    let dist = Uniform::new_inclusive(-1.0, 1.0);
    (0..n).map(|_| Value::new(dist.sample(rng) * scale)).collect()
}

/// Overwrites the payload of existing parameters with `U(-1, 1) * scale`.
///
/// Operates in-place; the nodes (and so any optimizer state keyed on their
/// position) are kept.
pub fn uniform_<R: Rng + ?Sized>(params: &[Value], rng: &mut R, scale: f64) {
    let dist = Uniform::new_inclusive(-1.0, 1.0);
    for p in params {
        p.set_data(dist.sample(rng) * scale);
    }
}

/// Fills the payload of `params` with 0. Operates in-place.
pub fn zeros_(params: &[Value]) {
    for p in params {
        p.set_data(0.0);
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;

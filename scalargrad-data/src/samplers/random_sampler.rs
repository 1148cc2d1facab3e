use super::traits::Sampler;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use scalargrad_core::Config;
use std::cell::Cell;

/// Visits dataset indices in random order.
///
/// Without a seed every pass draws from OS entropy. With a seed, pass `k`
/// uses an RNG seeded from `seed + k`, so a run is reproducible while each
/// epoch still sees a different order.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    replacement: bool,
    num_samples: Option<usize>,
    seed: Option<u64>,
    passes: Cell<u64>,
}

impl RandomSampler {
    /// * `replacement`: if `true`, an index can be drawn more than once.
    /// * `num_samples`: number of indices per pass; defaults to the dataset size.
    pub fn new(replacement: bool, num_samples: Option<usize>) -> Self {
        RandomSampler {
            replacement,
            num_samples,
            seed: None,
            passes: Cell::new(0),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// A shuffling sampler seeded from `config` (unseeded if it has no seed).
    pub fn from_config(config: &Config) -> Self {
        let sampler = Self::new(false, None);
        match config.seed() {
            Some(seed) => sampler.with_seed(seed),
            None => sampler,
        }
    }

    pub fn replacement(&self) -> bool {
        self.replacement
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn next_rng(&self) -> StdRng {
        let pass = self.passes.get();
        self.passes.set(pass + 1);
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(pass)),
            None => StdRng::from_entropy(),
        }
    }

    fn exceeds_population(&self, dataset_len: usize) -> bool {
        !self.replacement && self.num_samples.map_or(false, |n| n > dataset_len)
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize>> {
        if dataset_len == 0 {
            return Box::new(std::iter::empty());
        }
        if self.exceeds_population(dataset_len) {
            log::warn!(
                "RandomSampler: num_samples ({}) > dataset_len ({}) without replacement, yielding nothing",
                self.num_samples.unwrap_or(dataset_len),
                dataset_len
            );
            return Box::new(std::iter::empty());
        }

        let mut rng = self.next_rng();
        let count = self.num_samples.unwrap_or(dataset_len);
        let indices: Vec<usize> = if self.replacement {
            (0..count).map(|_| rng.gen_range(0..dataset_len)).collect()
        } else {
            let mut all: Vec<usize> = (0..dataset_len).collect();
            all.shuffle(&mut rng);
            all.truncate(count);
            all
        };
        Box::new(indices.into_iter())
    }

    fn len(&self, dataset_len: usize) -> usize {
        if dataset_len == 0 || self.exceeds_population(dataset_len) {
            0
        } else {
            self.num_samples.unwrap_or(dataset_len)
        }
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;

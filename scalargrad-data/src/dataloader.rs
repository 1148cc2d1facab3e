//! # DataLoader
//!
//! Groups dataset samples into batches in the order chosen by a [`Sampler`].
//!
//! ```rust
//! use scalargrad_data::dataloader::DataLoader;
//! use scalargrad_data::datasets::VecDataset;
//! use scalargrad_data::samplers::SequentialSampler;
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
//! let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false)
//!     .expect("batch_size is positive");
//! let batches: Vec<Vec<i32>> = loader.map(|b| b.expect("in bounds")).collect();
//! assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use scalargrad_core::ScalarGradError;

/// Iterates over a dataset one batch at a time.
///
/// A pass ends when the sampler is exhausted; call [`DataLoader::reset`] to
/// start the next epoch with a fresh sampler pass.
pub struct DataLoader<D: Dataset, S: Sampler> {
    dataset: D,
    batch_size: usize,
    sampler: S,
    drop_last: bool,
    indices_iter: Box<dyn Iterator<Item = usize>>,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// # Errors
    ///
    /// Returns `ScalarGradError::ConfigurationError` if `batch_size` is 0.
    pub fn new(dataset: D, batch_size: usize, sampler: S, drop_last: bool) -> Result<Self, ScalarGradError> {
        if batch_size == 0 {
            return Err(ScalarGradError::ConfigurationError(
                "DataLoader batch_size must be at least 1".to_string(),
            ));
        }
        let indices_iter = sampler.iter(dataset.len());
        Ok(Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
            indices_iter,
        })
    }

    /// Restarts iteration with a new pass of the sampler.
    pub fn reset(&mut self) {
        self.indices_iter = self.sampler.iter(self.dataset.len());
    }

    /// Number of batches in a full pass.
    pub fn num_batches(&self) -> usize {
        let samples = self.sampler.len(self.dataset.len());
        if self.drop_last {
            samples / self.batch_size
        } else {
            (samples + self.batch_size - 1) / self.batch_size
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn drop_last(&self) -> bool {
        self.drop_last
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }
}

impl<D: Dataset, S: Sampler> Iterator for DataLoader<D, S> {
    type Item = Result<Vec<D::Item>, ScalarGradError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for idx in self.indices_iter.by_ref().take(self.batch_size) {
            match self.dataset.get(idx) {
                Ok(item) => batch.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        Some(Ok(batch))
    }
}

impl<D: Dataset, S: Sampler> std::fmt::Debug for DataLoader<D, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataLoader")
            .field("dataset_len", &self.dataset.len())
            .field("batch_size", &self.batch_size)
            .field("sampler", &self.sampler)
            .field("drop_last", &self.drop_last)
            .finish()
    }
}

/// Splits a batch of `(features, target)` samples into the row/target slices
/// `Trainer::train_batch` expects.
pub fn samples_to_xy(batch: Vec<(Vec<f64>, f64)>) -> (Vec<Vec<f64>>, Vec<f64>) {
    batch.into_iter().unzip()
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;

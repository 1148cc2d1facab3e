//! # ScalarGrad data
//!
//! Datasets, samplers and a batching [`DataLoader`] that feed
//! `scalargrad_core::training::Trainer`.

pub mod dataloader;
pub mod datasets;
pub mod samplers;

pub use dataloader::{samples_to_xy, DataLoader};
pub use datasets::{Dataset, VecDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};

use super::*;
use crate::datasets::VecDataset;
use crate::samplers::{RandomSampler, SequentialSampler};

fn collect_batches<D: Dataset, S: Sampler>(loader: &mut DataLoader<D, S>) -> Vec<Vec<D::Item>> {
    loader.by_ref().map(|b| b.expect("Batch should not error")).collect()
}

#[test]
fn test_dataloader_sequential() {
    let dataset = VecDataset::new(vec![1, 2, 3, 4, 5, 6]);
    let mut loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false).unwrap();
    let batches = collect_batches(&mut loader);
    assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    assert_eq!(loader.num_batches(), 3);
}

#[test]
fn test_dataloader_short_last_batch() {
    let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
    let mut loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false).unwrap();
    let batches = collect_batches(&mut loader);
    assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
    assert_eq!(loader.num_batches(), 3);
}

#[test]
fn test_dataloader_drop_last() {
    let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
    let mut loader = DataLoader::new(dataset, 2, SequentialSampler::new(), true).unwrap();
    let batches = collect_batches(&mut loader);
    assert_eq!(batches, vec![vec![1, 2], vec![3, 4]]);
    assert_eq!(loader.num_batches(), 2);
}

#[test]
fn test_dataloader_zero_batch_size_rejected() {
    let dataset = VecDataset::new(vec![1, 2, 3]);
    let result = DataLoader::new(dataset, 0, SequentialSampler::new(), false);
    assert!(matches!(result, Err(ScalarGradError::ConfigurationError(_))));
}

#[test]
fn test_dataloader_reset_starts_new_pass() {
    let dataset = VecDataset::new(vec![1, 2, 3]);
    let mut loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false).unwrap();
    assert_eq!(collect_batches(&mut loader).len(), 2);
    assert!(loader.next().is_none());
    loader.reset();
    assert_eq!(collect_batches(&mut loader), vec![vec![1, 2], vec![3]]);
}

#[test]
fn test_dataloader_random_covers_every_sample() {
    let dataset = VecDataset::new((0..10).collect::<Vec<i32>>());
    let sampler = RandomSampler::new(false, None).with_seed(3);
    let mut loader = DataLoader::new(dataset, 3, sampler, false).unwrap();
    let mut seen: Vec<i32> = collect_batches(&mut loader).into_iter().flatten().collect();
    seen.sort();
    assert_eq!(seen, (0..10).collect::<Vec<_>>());
}

#[derive(Debug)]
struct OutOfRangeSampler;

impl Sampler for OutOfRangeSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize>> {
        Box::new(std::iter::once(dataset_len))
    }

    fn len(&self, _dataset_len: usize) -> usize {
        1
    }
}

#[test]
fn test_dataloader_propagates_dataset_errors() {
    let dataset = VecDataset::new(vec![1.0, 2.0]);
    let mut loader = DataLoader::new(dataset, 2, OutOfRangeSampler, false).unwrap();
    assert_eq!(
        loader.next(),
        Some(Err(ScalarGradError::IndexOutOfBounds { index: 2, len: 2 }))
    );
}

#[test]
fn test_samples_to_xy() {
    let (x, y) = samples_to_xy(vec![(vec![1.0, 2.0], 1.0), (vec![3.0, 4.0], -1.0)]);
    assert_eq!(x, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    assert_eq!(y, vec![1.0, -1.0]);
}

use std::fmt::Debug;

/// Decides the order in which a `DataLoader` visits dataset indices.
pub trait Sampler: Debug {
    /// Returns an iterator over indices in `0..dataset_len`.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize>>;

    /// Number of indices `iter` yields for a dataset of `dataset_len` items.
    fn len(&self, dataset_len: usize) -> usize;
}

use super::traits::Dataset;
use scalargrad_core::ScalarGradError;

/// A dataset backed by a `Vec`; `get` clones the stored sample.
#[derive(Debug, Clone)]
pub struct VecDataset<T: Clone> {
    data: Vec<T>,
}

impl<T: Clone> VecDataset<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl VecDataset<(Vec<f64>, f64)> {
    /// Pairs feature rows with their targets.
    ///
    /// # Errors
    ///
    /// Returns `ScalarGradError::InputSizeMismatch` if `x` and `y` differ in
    /// length.
    pub fn from_xy(x: Vec<Vec<f64>>, y: Vec<f64>) -> Result<Self, ScalarGradError> {
        if x.len() != y.len() {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: x.len(),
                actual: y.len(),
                operation: "VecDataset::from_xy".to_string(),
            });
        }
        Ok(Self::new(x.into_iter().zip(y).collect()))
    }
}

impl<T: Clone> Dataset for VecDataset<T> {
    type Item = T;

    fn get(&self, index: usize) -> Result<Self::Item, ScalarGradError> {
        self.data
            .get(index)
            .cloned()
            .ok_or(ScalarGradError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;

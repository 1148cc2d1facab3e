use scalargrad_core::ScalarGradError;

/// Indexed access to a collection of samples.
pub trait Dataset {
    /// The type of a single sample.
    type Item;

    /// Returns the sample at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ScalarGradError::IndexOutOfBounds` if `index >= self.len()`.
    fn get(&self, index: usize) -> Result<Self::Item, ScalarGradError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

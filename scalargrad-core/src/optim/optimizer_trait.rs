// src/optim/optimizer_trait.rs

use crate::error::ScalarGradError;
use crate::value::Value;

/// Trait defining the common interface for all optimizers.
///
/// An optimizer owns handles to the parameters it updates. Per-parameter state
/// is kept by position, so the slice passed at construction must come from a
/// stable `Module::parameters()` call.
pub trait Optimizer {
    /// Performs a single optimization step using the parameters' accumulated
    /// gradients.
    ///
    /// # Errors
    /// `NonFiniteGradient` if any gradient is NaN or infinite; no parameter is
    /// touched in that case.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    fn zero_grad(&mut self) {
        for p in self.parameters() {
            p.zero_grad();
        }
    }

    fn parameters(&self) -> &[Value];

    fn lr(&self) -> f64;

    /// # Errors
    /// `ConfigurationError` if `lr` is not a positive finite number.
    fn set_lr(&mut self, lr: f64) -> Result<(), ScalarGradError>;
}

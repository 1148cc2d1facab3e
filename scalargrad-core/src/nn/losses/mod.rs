// src/nn/losses/mod.rs

pub mod mse;
pub mod svm;

pub use mse::{MseLoss, Reduction};
pub use svm::SvmLoss;

use crate::error::ScalarGradError;
use crate::value::Value;

/// A loss builds a single scalar node out of predictions and constant targets,
/// using only graph-builder operations, so propagating from it reaches every
/// parameter that contributed to the predictions.
pub trait Loss: std::fmt::Debug {
    fn calculate(&self, predictions: &[Value], targets: &[f64]) -> Result<Value, ScalarGradError>;
}

/// Rejects empty or mismatched prediction/target pairs.
pub(crate) fn check_inputs(
    predictions: &[Value],
    targets: &[f64],
    operation: &str,
) -> Result<(), ScalarGradError> {
    if predictions.len() != targets.len() {
        return Err(ScalarGradError::InputSizeMismatch {
            expected: predictions.len(),
            actual: targets.len(),
            operation: operation.to_string(),
        });
    }
    if predictions.is_empty() {
        return Err(ScalarGradError::EmptyInput(format!(
            "{} received no predictions",
            operation
        )));
    }
    Ok(())
}

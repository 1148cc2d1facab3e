// src/optim/mod.rs

pub mod adam;
pub mod grad_clipping;
pub mod optimizer_trait;
pub mod sgd;

pub use adam::AdamOptimizer;
pub use grad_clipping::{clip_grad_norm_, clip_grad_value_};
pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;

use crate::error::ScalarGradError;
use crate::value::Value;

/// Fails on the first NaN/infinite gradient so a step never half-applies.
pub(crate) fn check_finite_grads(params: &[Value]) -> Result<(), ScalarGradError> {
    match params.iter().position(|p| !p.grad().is_finite()) {
        Some(index) => Err(ScalarGradError::NonFiniteGradient { index }),
        None => Ok(()),
    }
}

pub(crate) fn validate_lr(lr: f64) -> Result<(), ScalarGradError> {
    if !(lr > 0.0) || !lr.is_finite() {
        return Err(ScalarGradError::ConfigurationError(format!(
            "Invalid learning rate: {}",
            lr
        )));
    }
    Ok(())
}

pub(crate) fn validate_weight_decay(weight_decay: f64) -> Result<(), ScalarGradError> {
    if !(weight_decay >= 0.0) || !weight_decay.is_finite() {
        return Err(ScalarGradError::ConfigurationError(format!(
            "Invalid weight_decay value: {}",
            weight_decay
        )));
    }
    Ok(())
}

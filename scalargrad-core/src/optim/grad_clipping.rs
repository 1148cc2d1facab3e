// src/optim/grad_clipping.rs

use crate::error::ScalarGradError;
use crate::value::Value;

/// Clips the gradient of each parameter into `[-clip_value, clip_value]`.
///
/// Operates in-place on the gradients.
///
/// # Errors
/// Returns `ScalarGradError::ConfigurationError` if `clip_value` is negative or
/// not finite.
pub fn clip_grad_value_(params: &[Value], clip_value: f64) -> Result<(), ScalarGradError> {
    if !(clip_value >= 0.0) || !clip_value.is_finite() {
        return Err(ScalarGradError::ConfigurationError(format!(
            "clip_value must be finite and non-negative, got {}",
            clip_value
        )));
    }
    for p in params {
        p.set_grad(p.grad().clamp(-clip_value, clip_value));
    }
    Ok(())
}

/// Rescales the gradients of `params` so that their joint `norm_type`-norm is
/// at most `max_norm`.
///
/// The gradients are viewed as a single vector. If its norm exceeds
/// `max_norm`, every gradient is multiplied by `max_norm / (total_norm + 1e-6)`.
/// `f64::INFINITY` as `norm_type` selects the max-abs norm.
///
/// # Returns
/// The total norm before clipping.
///
/// # Errors
/// Returns `ScalarGradError::ConfigurationError` if `max_norm` is negative or
/// `norm_type` is not positive.
pub fn clip_grad_norm_(
    params: &[Value],
    max_norm: f64,
    norm_type: f64,
) -> Result<f64, ScalarGradError> {
    if !(max_norm >= 0.0) {
        return Err(ScalarGradError::ConfigurationError(format!(
            "max_norm must be non-negative, got {}",
            max_norm
        )));
    }
    if !(norm_type > 0.0) {
        return Err(ScalarGradError::ConfigurationError(format!(
            "norm_type must be positive, got {}",
            norm_type
        )));
    }
    if params.is_empty() {
        return Ok(0.0);
    }

    let total_norm = if norm_type.is_infinite() {
        params.iter().map(|p| p.grad().abs()).fold(0.0, f64::max)
    } else {
        params
            .iter()
            .map(|p| p.grad().abs().powf(norm_type))
            .sum::<f64>()
            .powf(1.0 / norm_type)
    };

    if !total_norm.is_finite() {
        log::warn!(
            "Total gradient norm is {}; gradients left unclipped",
            total_norm
        );
        return Ok(total_norm);
    }

    let clip_coef = if max_norm == 0.0 {
        0.0
    } else {
        max_norm / (total_norm + 1e-6)
    };
    if clip_coef < 1.0 {
        for p in params {
            p.set_grad(p.grad() * clip_coef);
        }
    }

    Ok(total_norm)
}

#[cfg(test)]
#[path = "grad_clipping_test.rs"]
mod tests;

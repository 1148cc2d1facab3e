// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::value::Value;

/// `a ** exponent` for a constant exponent.
///
/// Gradient: `exponent * a ** (exponent - 1)` times the output gradient.
///
/// # Errors
/// - `InvalidExponent` if `exponent` is NaN or infinite.
/// - `DomainError` if the result is not a real number (a negative base with a
///   non-integer exponent, or a zero base with a negative exponent) or if the
///   derivative is unbounded there (a zero base with `0 < exponent < 1`).
///
/// No node is created on error.
pub fn pow_op(a: &Value, exponent: f64) -> Result<Value, ScalarGradError> {
    if !exponent.is_finite() {
        return Err(ScalarGradError::InvalidExponent { exponent });
    }
    let base = a.data();
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(ScalarGradError::DomainError {
            operation: "pow".to_string(),
            value: base,
            reason: format!("negative base with non-integer exponent {}", exponent),
        });
    }
    if base == 0.0 && exponent < 0.0 {
        return Err(ScalarGradError::DomainError {
            operation: "pow".to_string(),
            value: base,
            reason: format!("zero base with negative exponent {}", exponent),
        });
    }
    if base == 0.0 && exponent > 0.0 && exponent < 1.0 {
        return Err(ScalarGradError::DomainError {
            operation: "pow".to_string(),
            value: base,
            reason: format!("gradient of zero base with exponent {} is unbounded", exponent),
        });
    }

    Ok(Value::from_op(
        base.powf(exponent),
        BackwardOp::Pow {
            base: a.clone(),
            exponent,
        },
        String::new(),
    ))
}

impl Value {
    /// See [`pow_op`].
    pub fn pow(&self, exponent: f64) -> Result<Value, ScalarGradError> {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;

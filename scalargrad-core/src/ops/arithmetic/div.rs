// scalargrad-core/src/ops/arithmetic/div.rs

use super::mul::mul_op;
use super::pow::pow_op;
use crate::error::ScalarGradError;
use crate::value::Value;

/// `a / b`, built as `a * b ** -1`.
///
/// # Errors
/// `DomainError` when `b` is zero (zero base with a negative exponent).
pub fn div_op(a: &Value, b: &Value) -> Result<Value, ScalarGradError> {
    let reciprocal = pow_op(b, -1.0)?;
    Ok(mul_op(a, &reciprocal))
}

impl Value {
    /// Fallible division; see [`div_op`].
    pub fn try_div(&self, rhs: &Value) -> Result<Value, ScalarGradError> {
        div_op(self, rhs)
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;

// scalargrad-core/src/ops/math_elem/ln.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::value::Value;

/// Natural logarithm. Gradient: `1 / a` times the output gradient.
///
/// # Errors
/// `DomainError` if `a` is not strictly positive; no node is created.
pub fn ln_op(a: &Value) -> Result<Value, ScalarGradError> {
    let x = a.data();
    if !(x > 0.0) {
        return Err(ScalarGradError::DomainError {
            operation: "log".to_string(),
            value: x,
            reason: "logarithm requires a strictly positive input".to_string(),
        });
    }
    Ok(Value::from_op(x.ln(), BackwardOp::Log(a.clone()), String::new()))
}

impl Value {
    /// Natural logarithm; see [`ln_op`].
    pub fn log(&self) -> Result<Value, ScalarGradError> {
        ln_op(self)
    }
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;

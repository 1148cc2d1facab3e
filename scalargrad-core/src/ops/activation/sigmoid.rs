// scalargrad-core/src/ops/activation/sigmoid.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Logistic sigmoid, `1 / (1 + exp(-a))`. Gradient: `s * (1 - s)` times the
/// output gradient.
pub fn sigmoid_op(a: &Value) -> Value {
    let s = 1.0 / (1.0 + (-a.data()).exp());
    Value::from_op(s, BackwardOp::Sigmoid(a.clone()), String::new())
}

impl Value {
    pub fn sigmoid(&self) -> Value {
        sigmoid_op(self)
    }
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;

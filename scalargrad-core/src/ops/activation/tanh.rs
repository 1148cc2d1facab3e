// scalargrad-core/src/ops/activation/tanh.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Hyperbolic tangent. Gradient: `(1 - tanh(a)^2)` times the output gradient.
pub fn tanh_op(a: &Value) -> Value {
    Value::from_op(a.data().tanh(), BackwardOp::Tanh(a.clone()), String::new())
}

impl Value {
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;

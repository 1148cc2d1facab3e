// scalargrad-core/src/ops/activation/relu.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Rectified linear unit, `max(0, a)`.
///
/// The gradient passes through only where the output is strictly positive,
/// so the subgradient at 0 is 0.
pub fn relu_op(a: &Value) -> Value {
    let x = a.data();
    let out = if x > 0.0 { x } else { 0.0 };
    Value::from_op(out, BackwardOp::Relu(a.clone()), String::new())
}

impl Value {
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;

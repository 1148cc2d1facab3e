// scalargrad-core/src/ops/math_elem/exp.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

/// `e ** a`. The gradient is the output itself times the output gradient.
pub fn exp_op(a: &Value) -> Value {
    Value::from_op(a.data().exp(), BackwardOp::Exp(a.clone()), String::new())
}

impl Value {
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;

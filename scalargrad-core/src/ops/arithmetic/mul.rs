// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

/// `a * b`. Each operand's gradient picks up the other operand's value times
/// the output gradient.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    Value::from_op(
        a.data() * b.data(),
        BackwardOp::Mul(a.clone(), b.clone()),
        String::new(),
    )
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;

// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

/// `a + b`. Both operands receive the output gradient unchanged.
///
/// Also reachable through the `+` operator for every mix of `Value`,
/// `&Value` and `f64`.
pub fn add_op(a: &Value, b: &Value) -> Value {
    Value::from_op(
        a.data() + b.data(),
        BackwardOp::Add(a.clone(), b.clone()),
        String::new(),
    )
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;

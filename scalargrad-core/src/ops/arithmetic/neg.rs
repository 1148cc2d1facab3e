// scalargrad-core/src/ops/arithmetic/neg.rs

use super::mul::mul_op;
use crate::value::Value;

/// `-a`, built as `a * -1` so the gradient flows through the product rule.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, &Value::new(-1.0))
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;

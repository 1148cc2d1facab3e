// scalargrad-core/src/ops/arithmetic/neg_test.rs

use super::*;
use approx::assert_relative_eq;

#[test]
fn test_neg() {
    let a = Value::new(2.5);
    let b = neg_op(&a);
    assert_relative_eq!(b.data(), -2.5);
    assert_eq!(b.op_tag(), "*");

    b.backward();
    assert_relative_eq!(a.grad(), -1.0);
}

#[test]
fn test_neg_operator() {
    let a = Value::new(-1.0);
    let b = -&a;
    let c = -b.clone();
    assert_relative_eq!(b.data(), 1.0);
    assert_relative_eq!(c.data(), -1.0);
}

// scalargrad-core/src/ops/arithmetic/sub_test.rs

use super::*;
use approx::assert_relative_eq;

#[test]
fn test_sub_forward_backward() {
    let a = Value::new(5.0);
    let b = Value::new(3.0);
    let c = sub_op(&a, &b);
    assert_relative_eq!(c.data(), 2.0);
    assert_eq!(c.op_tag(), "+");

    c.backward();
    assert_relative_eq!(a.grad(), 1.0);
    assert_relative_eq!(b.grad(), -1.0);
}

#[test]
fn test_sub_self_is_zero() {
    let a = Value::new(7.0);
    let c = &a - &a;
    assert_relative_eq!(c.data(), 0.0);
    c.backward();
    assert_relative_eq!(a.grad(), 0.0);
}

#[test]
fn test_sub_constants() {
    let a = Value::new(1.0);
    let right = &a - 4.0;
    let left = 4.0 - &a;
    assert_relative_eq!(right.data(), -3.0);
    assert_relative_eq!(left.data(), 3.0);

    left.backward();
    assert_relative_eq!(a.grad(), -1.0);
}

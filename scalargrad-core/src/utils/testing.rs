// src/utils/testing.rs

use crate::value::Value;

/// Checks that each value's payload is within `tolerance` of `expected`.
/// Panics with the offending index otherwise.
pub fn check_data_near(actual: &[Value], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Length mismatch");
    for (i, (a, &e)) in actual.iter().zip(expected).enumerate() {
        let diff = (a.data() - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                a.data(),
                e,
                diff,
                tolerance
            );
        }
    }
}

/// Same as [`check_data_near`] for accumulated gradients.
pub fn check_grads_near(actual: &[Value], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Length mismatch");
    for (i, (a, &e)) in actual.iter().zip(expected).enumerate() {
        let diff = (a.grad() - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                a.grad(),
                e,
                diff,
                tolerance
            );
        }
    }
}

/// Builds labelled leaves `x0, x1, ...` from raw numbers.
pub fn leaves(data: &[f64]) -> Vec<Value> {
    data.iter()
        .enumerate()
        .map(|(i, &d)| Value::with_label(d, &format!("x{}", i)))
        .collect()
}

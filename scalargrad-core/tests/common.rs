// Shared helpers for the integration tests.

use scalargrad_core::Value;

// Each test binary uses a different subset of these helpers.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Points on a 5x5 grid labelled by the sign of `x0 + x1`, skipping the
/// diagonal.
#[allow(dead_code)]
pub fn separable_grid() -> (Vec<Vec<f64>>, Vec<f64>) {
    let mut x = Vec::new();
    let mut y = Vec::new();
    for i in -2i32..=2 {
        for j in -2i32..=2 {
            if i + j == 0 {
                continue;
            }
            x.push(vec![i as f64 * 0.5, j as f64 * 0.5]);
            y.push(if i + j > 0 { 1.0 } else { -1.0 });
        }
    }
    (x, y)
}

#[allow(dead_code)]
pub fn grads(values: &[Value]) -> Vec<f64> {
    values.iter().map(Value::grad).collect()
}

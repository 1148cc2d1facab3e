// scalargrad-core/src/nn/losses/svm.rs

use super::{check_inputs, Loss};
use crate::error::ScalarGradError;
use crate::ops::{add_op, mul_op};
use crate::value::Value;

/// Max-margin hinge loss for targets in {-1, 1}: mean of
/// `relu(1 - target * pred)`.
#[derive(Debug, Clone, Default)]
pub struct SvmLoss;

impl SvmLoss {
    pub fn new() -> Self {
        SvmLoss
    }
}

impl Loss for SvmLoss {
    fn calculate(&self, predictions: &[Value], targets: &[f64]) -> Result<Value, ScalarGradError> {
        check_inputs(predictions, targets, "SvmLoss")?;

        let mut total = Value::new(0.0);
        for (pred, &target) in predictions.iter().zip(targets) {
            let margin = add_op(&Value::new(1.0), &mul_op(pred, &Value::new(-target)));
            total = &total + &margin.relu();
        }
        Ok(&total * (1.0 / predictions.len() as f64))
    }
}

#[cfg(test)]
#[path = "svm_test.rs"]
mod tests;

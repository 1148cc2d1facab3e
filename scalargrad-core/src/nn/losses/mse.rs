// scalargrad-core/src/nn/losses/mse.rs

use super::{check_inputs, Loss};
use crate::error::ScalarGradError;
use crate::value::Value;
use std::str::FromStr;

/// Specifies the reduction to apply to the summed squared errors:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarGradError::ConfigurationError(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Mean squared error, `Σ (pred - target)^2`, optionally divided by the count.
#[derive(Debug, Clone, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }
}

impl Loss for MseLoss {
    fn calculate(&self, predictions: &[Value], targets: &[f64]) -> Result<Value, ScalarGradError> {
        check_inputs(predictions, targets, "MseLoss")?;

        let mut total = Value::new(0.0);
        for (pred, &target) in predictions.iter().zip(targets) {
            total = &total + &(pred - target).pow(2.0)?;
        }
        Ok(match self.reduction {
            Reduction::Mean => &total * (1.0 / predictions.len() as f64),
            Reduction::Sum => total,
        })
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;

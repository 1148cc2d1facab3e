// src/optim/sgd.rs

use super::{check_finite_grads, validate_lr, validate_weight_decay};
use crate::error::ScalarGradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::value::Value;

/// Implements the Stochastic Gradient Descent (SGD) optimizer with classical
/// momentum and optional weight decay.
///
/// Per parameter `i` with gradient `g` (plus `weight_decay * data` when set):
/// `v_i = momentum * v_i - lr * g`, then `data += v_i`.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Value>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    velocities: Vec<f64>,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Errors
    /// `ConfigurationError` if `lr` is not positive or `momentum` is outside
    /// `[0, 1)`.
    pub fn new(params: Vec<Value>, lr: f64, momentum: f64) -> Result<Self, ScalarGradError> {
        validate_lr(lr)?;
        if !(0.0..1.0).contains(&momentum) {
            return Err(ScalarGradError::ConfigurationError(format!(
                "Invalid momentum value: {} (must be in [0, 1))",
                momentum
            )));
        }
        let velocities = vec![0.0; params.len()];
        Ok(SgdOptimizer {
            params,
            lr,
            momentum,
            weight_decay: 0.0,
            velocities,
        })
    }

    /// Adds an L2 penalty `weight_decay * data` to every gradient.
    pub fn with_weight_decay(mut self, weight_decay: f64) -> Result<Self, ScalarGradError> {
        validate_weight_decay(weight_decay)?;
        self.weight_decay = weight_decay;
        Ok(self)
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn velocities(&self) -> &[f64] {
        &self.velocities
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        check_finite_grads(&self.params)?;

        for (p, v) in self.params.iter().zip(self.velocities.iter_mut()) {
            let mut g = p.grad();
            if self.weight_decay != 0.0 {
                g += self.weight_decay * p.data();
            }
            *v = self.momentum * *v - self.lr * g;
            p.set_data(p.data() + *v);
        }
        Ok(())
    }

    fn parameters(&self) -> &[Value] {
        &self.params
    }

    fn lr(&self) -> f64 {
        self.lr
    }

    fn set_lr(&mut self, lr: f64) -> Result<(), ScalarGradError> {
        validate_lr(lr)?;
        self.lr = lr;
        Ok(())
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;

// src/optim/adam.rs

use super::{check_finite_grads, validate_lr, validate_weight_decay};
use crate::error::ScalarGradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::value::Value;

/// Adam optimizer with bias-corrected first and second moment estimates.
#[derive(Debug)]
pub struct AdamOptimizer {
    params: Vec<Value>,
    lr: f64,
    beta1: f64,
    beta2: f64,
    eps: f64,
    weight_decay: f64,
    /// First moment per parameter.
    m: Vec<f64>,
    /// Second moment per parameter.
    v: Vec<f64>,
    iterations: u64,
}

impl AdamOptimizer {
    /// Creates a new Adam optimizer.
    ///
    /// # Errors
    /// `ConfigurationError` if `lr` or `eps` is not positive, or a beta lies
    /// outside `[0, 1)`.
    pub fn new(
        params: Vec<Value>,
        lr: f64,
        beta1: f64,
        beta2: f64,
        eps: f64,
    ) -> Result<Self, ScalarGradError> {
        validate_lr(lr)?;
        if !(0.0..1.0).contains(&beta1) {
            return Err(ScalarGradError::ConfigurationError(format!(
                "Invalid beta1 value: {}",
                beta1
            )));
        }
        if !(0.0..1.0).contains(&beta2) {
            return Err(ScalarGradError::ConfigurationError(format!(
                "Invalid beta2 value: {}",
                beta2
            )));
        }
        if !(eps > 0.0) {
            return Err(ScalarGradError::ConfigurationError(format!(
                "Invalid epsilon value: {}",
                eps
            )));
        }
        let n = params.len();
        Ok(AdamOptimizer {
            params,
            lr,
            beta1,
            beta2,
            eps,
            weight_decay: 0.0,
            m: vec![0.0; n],
            v: vec![0.0; n],
            iterations: 0,
        })
    }

    /// Adam with `beta1 = 0.9`, `beta2 = 0.999`, `eps = 1e-8`.
    pub fn with_defaults(params: Vec<Value>, lr: f64) -> Result<Self, ScalarGradError> {
        Self::new(params, lr, 0.9, 0.999, 1e-8)
    }

    /// Adds an L2 penalty `weight_decay * data` to every gradient.
    pub fn with_weight_decay(mut self, weight_decay: f64) -> Result<Self, ScalarGradError> {
        validate_weight_decay(weight_decay)?;
        self.weight_decay = weight_decay;
        Ok(self)
    }

    /// Number of completed steps.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }
}

impl Optimizer for AdamOptimizer {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        check_finite_grads(&self.params)?;

        self.iterations += 1;
        let t = self.iterations as f64;
        let bias_correction1 = 1.0 - self.beta1.powf(t);
        let bias_correction2 = 1.0 - self.beta2.powf(t);

        for (i, p) in self.params.iter().enumerate() {
            let mut g = p.grad();
            if self.weight_decay != 0.0 {
                g += self.weight_decay * p.data();
            }

            self.m[i] = self.beta1 * self.m[i] + (1.0 - self.beta1) * g;
            self.v[i] = self.beta2 * self.v[i] + (1.0 - self.beta2) * g * g;

            let m_hat = self.m[i] / bias_correction1;
            let v_hat = self.v[i] / bias_correction2;
            p.set_data(p.data() - self.lr * m_hat / (v_hat.sqrt() + self.eps));
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
#[path = "adam_test.rs"]
mod tests;

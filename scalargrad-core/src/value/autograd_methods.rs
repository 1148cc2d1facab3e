// src/value/autograd_methods.rs

use super::Value;
use crate::autograd;
use crate::config::Config;

impl Value {
    /// Runs reverse propagation from this node with the default configuration
    /// (no gradient clipping).
    ///
    /// Gradients accumulate: call [`Value::zero_grad`] (or `Module::zero_grad`)
    /// on the leaves before propagating again.
    pub fn backward(&self) {
        autograd::backward(self, &Config::default());
    }

    /// Runs reverse propagation from this node, clamping every visited node's
    /// gradient when `config` carries a clip bound.
    pub fn backward_with(&self, config: &Config) {
        autograd::backward(self, config);
    }

    /// Resets this node's gradient to 0.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }
}

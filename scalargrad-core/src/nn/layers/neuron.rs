// src/nn/layers/neuron.rs

use super::activation::Activation;
use crate::error::ScalarGradError;
use crate::nn::init;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A single neuron: `activation(b + w·x)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
    training: bool,
}

impl Neuron {
    /// Creates a neuron with `nin` weights drawn from `U(-1, 1) * init_scale`
    /// and a zero bias.
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        activation: Activation,
        init_scale: f64,
        rng: &mut R,
    ) -> Self {
        Neuron {
            weights: init::uniform(rng, nin, init_scale),
            bias: Value::new(0.0),
            activation,
            training: true,
        }
    }

    /// Forward pass for a single sample.
    ///
    /// The weighted sum folds left starting from the bias, one `w * x` term per
    /// input in order.
    pub fn call(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::call".to_string(),
            });
        }
        let sum = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias.clone(), |acc, (w, x)| &acc + &(w * x));
        Ok(self.activation.apply(&sum))
    }

    /// Re-draws the weights and zeroes the bias, keeping the same nodes.
    pub fn reset_parameters<R: Rng + ?Sized>(&self, rng: &mut R, init_scale: f64) {
        init::uniform_(&self.weights, rng, init_scale);
        init::zeros_(std::slice::from_ref(&self.bias));
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }
}

impl Module for Neuron {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        Ok(vec![self.call(input)?])
    }

    /// Weights in input order, then the bias.
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut named: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("weight.{}", i), w.clone()))
            .collect();
        named.push(("bias".to_string(), self.bias.clone()));
        named
    }

    fn train(&mut self, mode: bool) {
        self.training = mode;
    }

    fn is_training(&self) -> bool {
        self.training
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Neuron(in={}, activation={})", self.nin(), self.activation)
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;

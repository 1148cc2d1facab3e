// src/nn/layers/layer.rs

use super::activation::Activation;
use super::neuron::Neuron;
use crate::error::ScalarGradError;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A fully connected layer: `nout` independent neurons reading the same input.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    training: bool,
}

impl Layer {
    /// # Errors
    /// `ConfigurationError` if `nout` is 0.
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        nout: usize,
        activation: Activation,
        init_scale: f64,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if nout == 0 {
            return Err(ScalarGradError::ConfigurationError(
                "Layer must have at least one neuron".to_string(),
            ));
        }
        let neurons = (0..nout)
            .map(|_| Neuron::new(nin, activation, init_scale, rng))
            .collect();
        Ok(Layer {
            neurons,
            training: true,
        })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn nin(&self) -> usize {
        self.neurons[0].nin()
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn reset_parameters<R: Rng + ?Sized>(&self, rng: &mut R, init_scale: f64) {
        for neuron in &self.neurons {
            neuron.reset_parameters(rng, init_scale);
        }
    }
}

impl Module for Layer {
    /// One output per neuron, in neuron order.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        self.neurons.iter().map(|n| n.call(input)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| {
                n.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neurons.{}.{}", i, name), p))
            })
            .collect()
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.neurons.iter().map(|n| n as &dyn Module).collect()
    }

    fn train(&mut self, mode: bool) {
        self.training = mode;
        for neuron in &mut self.neurons {
            neuron.train(mode);
        }
    }

    fn is_training(&self) -> bool {
        self.training
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layer(neurons={}, {})", self.nout(), self.neurons[0])
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;

// src/nn/layers/mlp.rs

use super::activation::Activation;
use super::layer::Layer;
use crate::config::Config;
use crate::error::ScalarGradError;
use crate::nn::init;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// Multi-layer perceptron: a stack of fully connected layers.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
    training: bool,
}

impl Mlp {
    /// Builds `layer_sizes.len()` layers, the first reading `nin` inputs.
    ///
    /// Without explicit `activations`, hidden layers use ReLU and the output
    /// layer is linear.
    ///
    /// # Errors
    /// `ConfigurationError` if `layer_sizes` is empty, contains a 0, or the
    /// number of activations differs from the number of layers.
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        layer_sizes: &[usize],
        activations: Option<&[Activation]>,
        init_scale: f64,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if layer_sizes.is_empty() {
            return Err(ScalarGradError::ConfigurationError(
                "MLP needs at least one layer".to_string(),
            ));
        }
        let activations: Vec<Activation> = match activations {
            Some(acts) => {
                if acts.len() != layer_sizes.len() {
                    return Err(ScalarGradError::ConfigurationError(format!(
                        "Number of activations ({}) must match number of layers ({})",
                        acts.len(),
                        layer_sizes.len()
                    )));
                }
                acts.to_vec()
            }
            None => {
                let mut acts = vec![Activation::Relu; layer_sizes.len() - 1];
                acts.push(Activation::Linear);
                acts
            }
        };

        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = nin;
        for (&nout, &activation) in layer_sizes.iter().zip(&activations) {
            layers.push(Layer::new(fan_in, nout, activation, init_scale, rng)?);
            fan_in = nout;
        }

        Ok(Mlp {
            layers,
            training: true,
        })
    }

    /// Like [`Mlp::new`], drawing initial weights from the generator described
    /// by `config` (reproducible when it carries a seed).
    pub fn with_config(
        nin: usize,
        layer_sizes: &[usize],
        activations: Option<&[Activation]>,
        init_scale: f64,
        config: &Config,
    ) -> Result<Self, ScalarGradError> {
        let mut rng = init::rng_from_config(config);
        Self::new(nin, layer_sizes, activations, init_scale, &mut rng)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn reset_parameters<R: Rng + ?Sized>(&self, rng: &mut R, init_scale: f64) {
        for layer in &self.layers {
            layer.reset_parameters(rng, init_scale);
        }
    }
}

impl Module for Mlp {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut x = input.to_vec();
        for layer in &self.layers {
            x = layer.forward(&x)?;
        }
        Ok(x)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| {
                l.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("layers.{}.{}", i, name), p))
            })
            .collect()
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.layers.iter().map(|l| l as &dyn Module).collect()
    }

    fn train(&mut self, mode: bool) {
        self.training = mode;
        for layer in &mut self.layers {
            layer.train(mode);
        }
    }

    fn is_training(&self) -> bool {
        self.training
    }
}

impl fmt::Display for Mlp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MLP(layers={}, params={})",
            self.layers.len(),
            self.num_parameters()
        )
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;

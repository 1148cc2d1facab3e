// src/nn/layers/activation.rs

use crate::error::ScalarGradError;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// Non-linearity applied to a neuron's weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Relu,
    Tanh,
    Sigmoid,
    /// Identity; no node is added.
    Linear,
}

impl Activation {
    pub fn apply(&self, x: &Value) -> Value {
        match self {
            Activation::Relu => x.relu(),
            Activation::Tanh => x.tanh(),
            Activation::Sigmoid => x.sigmoid(),
            Activation::Linear => x.clone(),
        }
    }
}

impl FromStr for Activation {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "relu" => Ok(Activation::Relu),
            "tanh" => Ok(Activation::Tanh),
            "sigmoid" => Ok(Activation::Sigmoid),
            "linear" => Ok(Activation::Linear),
            other => Err(ScalarGradError::ConfigurationError(format!(
                "Unknown activation: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Activation::Relu => "relu",
            Activation::Tanh => "tanh",
            Activation::Sigmoid => "sigmoid",
            Activation::Linear => "linear",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
#[path = "activation_test.rs"]
mod tests;

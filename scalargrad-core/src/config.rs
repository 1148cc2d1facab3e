// src/config.rs

use crate::error::ScalarGradError;

/// Engine-wide configuration.
///
/// The gradient clip bound is handed explicitly to every propagation
/// (see [`crate::autograd::backward`]); nothing here is global state.
/// Fields are private and only set through validating builders, so a
/// `Config` value always satisfies its invariants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    gradient_clip: Option<f64>,
    seed: Option<u64>,
}

impl Config {
    /// Default configuration: no clipping, no fixed seed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamps every node gradient into `[-clip, clip]` during propagation.
    ///
    /// # Errors
    /// `ConfigurationError` if `clip` is negative or not finite.
    pub fn with_gradient_clip(mut self, clip: f64) -> Result<Self, ScalarGradError> {
        if !clip.is_finite() || clip < 0.0 {
            return Err(ScalarGradError::ConfigurationError(format!(
                "Invalid gradient clip bound: {} (must be finite and >= 0)",
                clip
            )));
        }
        self.gradient_clip = Some(clip);
        Ok(self)
    }

    pub fn without_gradient_clip(mut self) -> Self {
        self.gradient_clip = None;
        self
    }

    /// Fixes the seed used by parameter initialisation and random samplers.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn gradient_clip(&self) -> Option<f64> {
        self.gradient_clip
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

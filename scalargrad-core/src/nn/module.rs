// src/nn/module.rs

use crate::error::ScalarGradError;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// Parameters are the leaf `Value`s an optimizer updates. Their order is part
/// of the contract: `parameters()` must return the same nodes in the same
/// order on every call, because optimizers keep per-parameter state by
/// position.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module, building graph nodes on top of
    /// `input`.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// All learnable parameters, including those of sub-modules.
    fn parameters(&self) -> Vec<Value>;

    /// Parameters along with hierarchical names such as `"layers.0.neurons.1.bias"`.
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Direct child modules. Modules without children keep the default.
    fn children(&self) -> Vec<&dyn Module> {
        Vec::new()
    }

    /// Sets every parameter's gradient to 0.
    fn zero_grad(&self) {
        for p in self.parameters() {
            p.zero_grad();
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Switches training mode on or off for this module and its children.
    fn train(&mut self, mode: bool);

    fn eval(&mut self) {
        self.train(false);
    }

    fn is_training(&self) -> bool;
}

#[cfg(test)]
#[path = "module_test.rs"]
mod tests;

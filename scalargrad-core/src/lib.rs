//! # ScalarGrad core
//!
//! A scalar-valued reverse-mode automatic differentiation engine.
//!
//! Every [`Value`] is a node of a dynamically built graph that remembers the
//! operation which produced it. Calling [`Value::backward`] on an output orders
//! the graph topologically and propagates gradients back to every ancestor.
//!
//! On top of the engine sit small consumers of its public boundary: neurons,
//! layers and MLPs ([`nn`]), losses ([`nn::losses`]), optimizers ([`optim`]) and
//! a training loop ([`training`]).

pub mod autograd;
pub mod config;
pub mod error;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod training;
pub mod utils;
pub mod value;
pub mod value_data;

// Re-export the core types so they are reachable as `scalargrad_core::Value` etc.
pub use config::Config;
pub use error::ScalarGradError;
pub use value::Value;

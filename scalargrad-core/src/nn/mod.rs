// src/nn/mod.rs
// Neural-network building blocks composed from scalar `Value`s.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module;

// Re-export common items
pub use layers::{Activation, Layer, Mlp, Neuron};
pub use losses::{Loss, MseLoss, Reduction, SvmLoss};
pub use module::Module;

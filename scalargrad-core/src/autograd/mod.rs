// src/autograd/mod.rs

pub mod backward;
pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward::backward;
pub use backward_op::BackwardOp;
pub use graph::{topological_sort, trace, NodeId};

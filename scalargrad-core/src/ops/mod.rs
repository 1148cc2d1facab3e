// src/ops/mod.rs
//
// Graph builder: every function here allocates exactly one new node wired to
// its operands (composite ops like `sub` or `div` go through the primitive
// ones and so may allocate constants and intermediates as well).

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::{relu_op, sigmoid_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::{exp_op, ln_op};

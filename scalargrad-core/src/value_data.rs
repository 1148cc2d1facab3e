// src/value_data.rs

use crate::autograd::BackwardOp;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::mem;
use std::rc::Rc;

/// The node behind a [`crate::Value`] handle.
///
/// `data` and `grad` are interior-mutable so optimizers and the propagator can
/// write them through a shared handle. `op` is fixed at construction and is the
/// only place parents are recorded, so the parent set never changes once the
/// node exists.
pub struct ValueData {
    /// Forward-computed scalar.
    pub(crate) data: Cell<f64>,
    /// Gradient accumulator, starts at 0.
    pub(crate) grad: Cell<f64>,
    /// The producing operation together with its operands.
    pub(crate) op: BackwardOp,
    /// Diagnostic name, no semantic effect.
    pub(crate) label: RefCell<String>,
}

impl ValueData {
    pub(crate) fn new(data: f64, op: BackwardOp, label: String) -> Self {
        ValueData {
            data: Cell::new(data),
            grad: Cell::new(0.0),
            op,
            label: RefCell::new(label),
        }
    }
}

// Operands are printed by tag only; a derived impl would walk the whole graph.
impl fmt::Debug for ValueData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueData")
            .field("data", &self.data.get())
            .field("grad", &self.grad.get())
            .field("op", &self.op.to_string())
            .field("label", &*self.label.borrow())
            .finish()
    }
}

// Long chains would otherwise be dropped recursively, one stack frame per node.
impl Drop for ValueData {
    fn drop(&mut self) {
        let mut pending = mem::replace(&mut self.op, BackwardOp::Leaf).into_inputs();
        while let Some(value) = pending.pop() {
            if let Ok(mut node) = Rc::try_unwrap(value.node) {
                pending.extend(mem::replace(&mut node.op, BackwardOp::Leaf).into_inputs());
            }
        }
    }
}

// src/value/accessors.rs

use super::Value;
use crate::autograd::BackwardOp;
use std::collections::HashSet;

impl Value {
    pub fn data(&self) -> f64 {
        self.node.data.get()
    }

    /// Overwrites the payload. Used by optimizers; downstream nodes keep the
    /// values computed when they were built.
    pub fn set_data(&self, data: f64) {
        self.node.data.set(data);
    }

    pub fn grad(&self) -> f64 {
        self.node.grad.get()
    }

    pub(crate) fn set_grad(&self, grad: f64) {
        self.node.grad.set(grad);
    }

    pub(crate) fn accumulate_grad(&self, delta: f64) {
        self.node.grad.set(self.node.grad.get() + delta);
    }

    pub fn label(&self) -> String {
        self.node.label.borrow().clone()
    }

    pub fn set_label(&self, label: &str) {
        *self.node.label.borrow_mut() = label.to_string();
    }

    pub(crate) fn op(&self) -> &BackwardOp {
        &self.node.op
    }

    /// Operator tag of the producing operation (`""` for leaves).
    pub fn op_tag(&self) -> String {
        self.node.op.to_string()
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node.op, BackwardOp::Leaf)
    }

    /// Distinct parents of this node, in operand order.
    ///
    /// `a + a` has a single parent.
    pub fn parents(&self) -> Vec<Value> {
        let mut seen = HashSet::new();
        self.node
            .op
            .inputs()
            .into_iter()
            .filter(|p| seen.insert(p.id()))
            .cloned()
            .collect()
    }
}

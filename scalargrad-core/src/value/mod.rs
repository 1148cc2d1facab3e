// src/value/mod.rs

use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::value_data::ValueData;
use std::rc::Rc;

mod accessors;
mod autograd_methods;
mod traits;

/// A scalar node of the computation graph.
///
/// `Value` is a cheap handle: cloning it clones an `Rc`, so every clone refers
/// to the same node. Equality and hashing are by node identity, never by the
/// numeric payload; two leaves both holding `2.0` are distinct nodes.
///
/// `Value` is neither `Send` nor `Sync`. Graph construction and propagation
/// happen on a single thread.
#[derive(Clone)]
pub struct Value {
    pub(crate) node: Rc<ValueData>,
}

impl Value {
    /// Creates a new leaf node holding `data`, with an empty label.
    pub fn new(data: f64) -> Self {
        Self::with_label(data, "")
    }

    /// Creates a new labelled leaf node.
    pub fn with_label(data: f64, label: &str) -> Self {
        Self::from_op(data, BackwardOp::Leaf, label.to_string())
    }

    /// Allocates a node produced by `op`. Only the graph builder calls this.
    pub(crate) fn from_op(data: f64, op: BackwardOp, label: String) -> Self {
        let value = Value {
            node: Rc::new(ValueData::new(data, op, label)),
        };
        log::trace!("Created {}", value);
        value
    }

    /// Identity of the underlying node, usable as a map/set key.
    pub fn id(&self) -> NodeId {
        Rc::as_ptr(&self.node)
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

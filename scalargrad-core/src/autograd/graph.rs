// src/autograd/graph.rs

use crate::value::Value;
use crate::value_data::ValueData;
use std::collections::HashSet;

/// Identity of a graph node: the address of its shared allocation.
pub type NodeId = *const ValueData;

/// One pending node of the depth-first walk.
struct Frame {
    node: Value,
    parents: Vec<Value>,
    cursor: usize,
}

impl Frame {
    fn new(node: Value) -> Self {
        let parents = node.parents();
        Frame {
            node,
            parents,
            cursor: 0,
        }
    }

    fn next_parent(&mut self) -> Option<Value> {
        let parent = self.parents.get(self.cursor).cloned();
        if parent.is_some() {
            self.cursor += 1;
        }
        parent
    }
}

/// Orders every ancestor of `root` (and `root` itself) so that each node comes
/// after all of its parents.
///
/// This is a depth-first postorder: parents are visited in operand order before
/// their child is appended, which makes the result deterministic for a given
/// construction order. The walk keeps an explicit stack, so graph depth is not
/// bounded by the call stack.
///
/// # Panics
/// Panics if a node is reached again while it is still on the current path.
/// Parents are fixed at construction, so no public API can build such a graph.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut sorted = Vec::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut on_path: HashSet<NodeId> = HashSet::new();
    let mut stack = vec![Frame::new(root.clone())];
    visited.insert(root.id());
    on_path.insert(root.id());

    while let Some(frame) = stack.last_mut() {
        match frame.next_parent() {
            Some(parent) => {
                let id = parent.id();
                if on_path.contains(&id) {
                    panic!("graph invariant violated: node {:?} is its own ancestor", parent);
                }
                if visited.insert(id) {
                    on_path.insert(id);
                    stack.push(Frame::new(parent));
                }
            }
            None => {
                let node = frame.node.clone();
                stack.pop();
                on_path.remove(&node.id());
                sorted.push(node);
            }
        }
    }

    sorted
}

/// Lists the nodes reachable from `root` together with the parent → child
/// edges between them. Read-only; used by rendering front ends.
pub fn trace(root: &Value) -> (Vec<Value>, Vec<(Value, Value)>) {
    let nodes = topological_sort(root);
    let edges = nodes
        .iter()
        .flat_map(|child| {
            child
                .parents()
                .into_iter()
                .map(move |parent| (parent, child.clone()))
        })
        .collect();
    (nodes, edges)
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;

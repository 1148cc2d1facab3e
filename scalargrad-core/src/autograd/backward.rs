// src/autograd/backward.rs

use super::graph::topological_sort;
use crate::config::Config;
use crate::value::Value;

/// Reverse-mode propagation from `root`.
///
/// Seeds `root.grad` with 1.0 (overwriting it), then walks the topological
/// order backwards, letting each node push its gradient into its parents. When
/// `config` carries a clip bound `c`, every visited node's gradient is clamped
/// into `[-c, c]` right after its own rule has run.
///
/// Gradients of every other node accumulate on top of whatever they held;
/// nothing is reset here. That includes intermediate nodes: a stale gradient
/// left by an earlier pass is pushed to the parents again, so a second pass
/// only doubles leaf gradients when the leaves feed `root` directly.
pub fn backward(root: &Value, config: &Config) {
    let order = topological_sort(root);
    let clip = config.gradient_clip();

    root.set_grad(1.0);
    for node in order.iter().rev() {
        node.op().propagate(node);
        if let Some(c) = clip {
            node.set_grad(node.grad().clamp(-c, c));
        }
    }

    log::debug!("Backward pass completed for {} nodes", order.len());
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;

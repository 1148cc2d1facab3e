// src/autograd/backward_op.rs

use crate::value::Value;
use std::fmt;

/// The operation that produced a node, holding its operands.
///
/// The set of operators is closed; the reverse pass dispatches on the variant
/// instead of calling stored closures. Operands are shared handles, so a node
/// keeps its whole ancestry alive.
#[derive(Clone)]
pub enum BackwardOp {
    /// A node created directly from a number.
    Leaf,
    Add(Value, Value),
    Mul(Value, Value),
    Pow { base: Value, exponent: f64 },
    Relu(Value),
    Tanh(Value),
    Sigmoid(Value),
    Exp(Value),
    Log(Value),
}

impl BackwardOp {
    /// Operands in the order they were written, duplicates included.
    pub fn inputs(&self) -> Vec<&Value> {
        match self {
            BackwardOp::Leaf => vec![],
            BackwardOp::Add(a, b) | BackwardOp::Mul(a, b) => vec![a, b],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Relu(a)
            | BackwardOp::Tanh(a)
            | BackwardOp::Sigmoid(a)
            | BackwardOp::Exp(a)
            | BackwardOp::Log(a) => vec![a],
        }
    }

    /// Consumes the operation, handing back its operands.
    pub(crate) fn into_inputs(self) -> Vec<Value> {
        match self {
            BackwardOp::Leaf => vec![],
            BackwardOp::Add(a, b) | BackwardOp::Mul(a, b) => vec![a, b],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Relu(a)
            | BackwardOp::Tanh(a)
            | BackwardOp::Sigmoid(a)
            | BackwardOp::Exp(a)
            | BackwardOp::Log(a) => vec![a],
        }
    }

    /// Adds this node's contribution to the gradients of its operands.
    ///
    /// `out` is the node that owns this operation. Contributions are
    /// accumulated, never assigned, so an operand used twice (`a + a`,
    /// `a * a`) receives both terms.
    pub fn propagate(&self, out: &Value) {
        let g = out.grad();
        match self {
            BackwardOp::Leaf => {}
            BackwardOp::Add(a, b) => {
                a.accumulate_grad(g);
                b.accumulate_grad(g);
            }
            BackwardOp::Mul(a, b) => {
                a.accumulate_grad(b.data() * g);
                b.accumulate_grad(a.data() * g);
            }
            BackwardOp::Pow { base, exponent } => {
                let k = *exponent;
                // x ** 0 is constant; skip it so 0 ** -1 never turns into 0 * inf.
                if k != 0.0 {
                    base.accumulate_grad(k * base.data().powf(k - 1.0) * g);
                }
            }
            BackwardOp::Relu(a) => {
                // Subgradient at 0 is 0.
                if out.data() > 0.0 {
                    a.accumulate_grad(g);
                }
            }
            BackwardOp::Tanh(a) => {
                let t = out.data();
                a.accumulate_grad((1.0 - t * t) * g);
            }
            BackwardOp::Sigmoid(a) => {
                let s = out.data();
                a.accumulate_grad(s * (1.0 - s) * g);
            }
            BackwardOp::Exp(a) => {
                a.accumulate_grad(out.data() * g);
            }
            BackwardOp::Log(a) => {
                a.accumulate_grad(g / a.data());
            }
        }
    }
}

/// The operator tag shown in graph introspection.
impl fmt::Display for BackwardOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackwardOp::Leaf => Ok(()),
            BackwardOp::Add(..) => write!(f, "+"),
            BackwardOp::Mul(..) => write!(f, "*"),
            BackwardOp::Pow { exponent, .. } => write!(f, "**{}", exponent),
            BackwardOp::Relu(_) => write!(f, "ReLU"),
            BackwardOp::Tanh(_) => write!(f, "tanh"),
            BackwardOp::Sigmoid(_) => write!(f, "sigmoid"),
            BackwardOp::Exp(_) => write!(f, "exp"),
            BackwardOp::Log(_) => write!(f, "log"),
        }
    }
}

impl fmt::Debug for BackwardOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BackwardOp({:?})", self.to_string())
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;

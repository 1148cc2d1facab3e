// src/value/traits.rs

use super::Value;
use crate::ops::arithmetic::{add_op, mul_op, neg_op, sub_op};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};
use std::rc::Rc;

// --- Identity semantics ---

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

// --- Formatting ---

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.node.label.borrow();
        if label.is_empty() {
            write!(f, "Value(unlabeled")?;
        } else {
            write!(f, "Value('{}'", label)?;
        }
        write!(f, ", data={:.4}, grad={:.4})", self.data(), self.grad())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("data", &self.data())
            .field("grad", &self.grad())
            .field("op", &self.op_tag())
            .field("label", &self.label())
            .finish()
    }
}

// --- Operator overloading ---
//
// Every combination of owned/borrowed `Value` and raw `f64` is supported. A raw
// constant becomes a fresh leaf; operand order is kept as written.

macro_rules! impl_value_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<&Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&self, &rhs)
            }
        }

        impl $trait<&Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&self, rhs)
            }
        }

        impl $trait<Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, &rhs)
            }
        }

        impl $trait<&Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&Value::new(self), rhs)
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&Value::new(self), &rhs)
            }
        }
    };
}

impl_value_binary_op!(Add, add, add_op);
impl_value_binary_op!(Mul, mul, mul_op);
impl_value_binary_op!(Sub, sub, sub_op);

impl Add<f64> for &Value {
    type Output = Value;
    fn add(self, rhs: f64) -> Value {
        add_op(self, &Value::new(rhs))
    }
}

impl Add<f64> for Value {
    type Output = Value;
    fn add(self, rhs: f64) -> Value {
        &self + rhs
    }
}

impl Mul<f64> for &Value {
    type Output = Value;
    fn mul(self, rhs: f64) -> Value {
        mul_op(self, &Value::new(rhs))
    }
}

impl Mul<f64> for Value {
    type Output = Value;
    fn mul(self, rhs: f64) -> Value {
        &self * rhs
    }
}

// `x - c` adds the negated constant directly instead of building a negation node.
impl Sub<f64> for &Value {
    type Output = Value;
    fn sub(self, rhs: f64) -> Value {
        add_op(self, &Value::new(-rhs))
    }
}

impl Sub<f64> for Value {
    type Output = Value;
    fn sub(self, rhs: f64) -> Value {
        &self - rhs
    }
}

impl Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(&self)
    }
}

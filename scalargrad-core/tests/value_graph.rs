// Engine-level scenarios exercised through the public API only.

mod common;

use approx::assert_relative_eq;
use scalargrad_core::autograd::grad_check::check_grad;
use scalargrad_core::autograd::{topological_sort, trace};
use scalargrad_core::utils::testing::{check_grads_near, leaves};
use scalargrad_core::{Config, ScalarGradError, Value};

#[test]
fn golden_expression() -> Result<(), ScalarGradError> {
    common::init_logger();
    let a = Value::with_label(-4.0, "a");
    let b = Value::with_label(2.0, "b");
    let c = &a + &b;
    let d = &a * &b + b.pow(3.0)?;
    let e = &c - &d;
    let f = e.pow(2.0)?;
    f.set_label("f");

    f.backward();
    assert_relative_eq!(f.data(), 4.0);
    check_grads_near(&[a.clone(), b.clone()], &[4.0, 28.0], 1e-12);
    assert_eq!(f.to_string(), "Value('f', data=4.0000, grad=1.0000)");
    Ok(())
}

#[test]
fn longer_expression_matches_finite_differences() {
    // A mix of every operator on two inputs.
    let result = check_grad(
        |v| {
            let a = &v[0];
            let b = &v[1];
            let c = a * b + a.pow(2.0)?;
            let d = c.tanh() + b.sigmoid() * a.exp();
            let e = d.try_div(&(b.relu() + 1.0))?;
            let f = (&e * &e + 1.0).log()? - 2.0 * a;
            Ok(-f)
        },
        &[0.3, 1.2],
        1e-6,
        1e-5,
    );
    assert_eq!(result, Ok(()));
}

#[test]
fn double_backward_doubles_leaf_grads() {
    let x = leaves(&[1.5, -2.0]);
    let y = &x[0] * &x[1];
    y.backward();
    y.backward();
    assert_eq!(common::grads(&x), vec![-4.0, 3.0]);

    for v in &x {
        v.zero_grad();
    }
    y.backward();
    assert_eq!(common::grads(&x), vec![-2.0, 1.5]);
}

#[test]
fn double_backward_through_intermediate_node() {
    let a = Value::new(1.0);
    let b = &a * 3.0;
    let c = &b * 4.0;
    c.backward();
    assert_eq!(a.grad(), 12.0);
    c.backward();
    assert_eq!(a.grad(), 36.0);

    a.zero_grad();
    b.zero_grad();
    c.backward();
    assert_eq!(a.grad(), 12.0);
}

#[test]
fn clipping_through_config() -> Result<(), ScalarGradError> {
    let a = Value::new(3.0);
    let out = a.pow(4.0)?; // d/da = 108
    out.backward_with(&Config::new().with_gradient_clip(10.0)?);
    assert_relative_eq!(a.grad(), 10.0);
    Ok(())
}

#[test]
fn introspection_is_read_only() -> Result<(), ScalarGradError> {
    let a = Value::with_label(1.0, "a");
    let b = a.exp();
    let c = (&b * &a).log()?;
    let (nodes, edges) = trace(&c);
    assert_eq!(nodes, topological_sort(&c));
    assert_eq!(nodes.len(), 4);
    assert_eq!(edges.len(), 4); // a->b, b->mul, a->mul, mul->c
    let tags: Vec<String> = nodes.iter().map(Value::op_tag).collect();
    assert_eq!(tags, vec!["", "exp", "*", "log"]);
    // Nothing was propagated by tracing.
    assert!(nodes.iter().all(|n| n.grad() == 0.0));
    Ok(())
}

#[test]
fn invalid_inputs_fail_fast() {
    let neg = Value::new(-1.0);
    assert!(matches!(neg.log(), Err(ScalarGradError::DomainError { .. })));
    assert!(matches!(neg.pow(0.5), Err(ScalarGradError::DomainError { .. })));
    assert!(matches!(
        Value::new(1.0).try_div(&Value::new(0.0)),
        Err(ScalarGradError::DomainError { .. })
    ));
    assert!(matches!(
        Value::new(2.0).pow(f64::NAN),
        Err(ScalarGradError::InvalidExponent { .. })
    ));
}

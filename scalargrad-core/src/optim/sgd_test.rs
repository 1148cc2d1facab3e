// src/optim/sgd_test.rs

use super::*;
use approx::assert_relative_eq;

fn param_with_grad(data: f64, grad: f64) -> Value {
    let p = Value::new(data);
    p.set_grad(grad);
    p
}

#[test]
fn test_sgd_basic_step() -> Result<(), ScalarGradError> {
    let p = param_with_grad(1.0, 0.5);
    let mut opt = SgdOptimizer::new(vec![p.clone()], 0.1, 0.0)?;
    opt.step()?;
    assert_relative_eq!(p.data(), 0.95, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_momentum() -> Result<(), ScalarGradError> {
    let p = param_with_grad(0.0, 1.0);
    let mut opt = SgdOptimizer::new(vec![p.clone()], 0.1, 0.9)?;

    opt.step()?; // v = -0.1
    assert_relative_eq!(p.data(), -0.1, epsilon = 1e-12);
    opt.step()?; // v = 0.9 * -0.1 - 0.1 = -0.19
    assert_relative_eq!(p.data(), -0.29, epsilon = 1e-12);
    assert_relative_eq!(opt.velocities()[0], -0.19, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_weight_decay() -> Result<(), ScalarGradError> {
    let p = param_with_grad(2.0, 0.0);
    let mut opt = SgdOptimizer::new(vec![p.clone()], 0.1, 0.0)?.with_weight_decay(0.5)?;
    opt.step()?; // g = 0 + 0.5 * 2
    assert_relative_eq!(p.data(), 1.9, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_zero_grad() -> Result<(), ScalarGradError> {
    let a = param_with_grad(1.0, 3.0);
    let b = param_with_grad(1.0, -3.0);
    let mut opt = SgdOptimizer::new(vec![a.clone(), b.clone()], 0.1, 0.0)?;
    opt.zero_grad();
    assert_eq!(a.grad(), 0.0);
    assert_eq!(b.grad(), 0.0);
    Ok(())
}

#[test]
fn test_sgd_invalid_config() {
    assert!(matches!(
        SgdOptimizer::new(vec![], 0.0, 0.0),
        Err(ScalarGradError::ConfigurationError(_))
    ));
    assert!(matches!(
        SgdOptimizer::new(vec![], 0.1, 1.0),
        Err(ScalarGradError::ConfigurationError(_))
    ));
    assert!(matches!(
        SgdOptimizer::new(vec![], 0.1, -0.1),
        Err(ScalarGradError::ConfigurationError(_))
    ));
}

#[test]
fn test_sgd_set_lr() -> Result<(), ScalarGradError> {
    let mut opt = SgdOptimizer::new(vec![], 0.1, 0.0)?;
    opt.set_lr(0.01)?;
    assert_relative_eq!(opt.lr(), 0.01, epsilon = 1e-12);
    assert!(opt.set_lr(-1.0).is_err());
    assert_relative_eq!(opt.lr(), 0.01, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_non_finite_grad_leaves_params_untouched() -> Result<(), ScalarGradError> {
    let a = param_with_grad(1.0, 1.0);
    let b = param_with_grad(1.0, f64::NAN);
    let mut opt = SgdOptimizer::new(vec![a.clone(), b.clone()], 0.1, 0.0)?;
    assert_eq!(opt.step(), Err(ScalarGradError::NonFiniteGradient { index: 1 }));
    assert_eq!(a.data(), 1.0);
    assert_eq!(b.data(), 1.0);
    Ok(())
}

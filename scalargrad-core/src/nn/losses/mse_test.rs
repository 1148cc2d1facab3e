// scalargrad-core/src/nn/losses/mse_test.rs

use super::*;
use approx::assert_relative_eq;

#[test]
fn test_mse_mean() -> Result<(), ScalarGradError> {
    let preds = vec![Value::new(1.0), Value::new(2.0), Value::new(4.0)];
    let loss = MseLoss::default().calculate(&preds, &[1.0, 3.0, 2.0])?;
    // (0 + 1 + 4) / 3
    assert_relative_eq!(loss.data(), 5.0 / 3.0);

    loss.backward();
    // d/dp (p - t)^2 / n = 2 (p - t) / n
    assert_relative_eq!(preds[0].grad(), 0.0);
    assert_relative_eq!(preds[1].grad(), -2.0 / 3.0);
    assert_relative_eq!(preds[2].grad(), 4.0 / 3.0);
    Ok(())
}

#[test]
fn test_mse_sum() -> Result<(), ScalarGradError> {
    let preds = vec![Value::new(0.5), Value::new(-0.5)];
    let loss = MseLoss::new(Reduction::Sum).calculate(&preds, &[1.0, 1.0])?;
    assert_relative_eq!(loss.data(), 0.25 + 2.25);
    loss.backward();
    assert_relative_eq!(preds[0].grad(), -1.0);
    assert_relative_eq!(preds[1].grad(), -3.0);
    Ok(())
}

#[test]
fn test_mse_errors() {
    let preds = vec![Value::new(1.0)];
    assert!(matches!(
        MseLoss::default().calculate(&preds, &[1.0, 2.0]),
        Err(ScalarGradError::InputSizeMismatch { expected: 1, actual: 2, .. })
    ));
    assert!(matches!(
        MseLoss::default().calculate(&[], &[]),
        Err(ScalarGradError::EmptyInput(_))
    ));
}

#[test]
fn test_reduction_from_str() -> Result<(), ScalarGradError> {
    assert_eq!("mean".parse::<Reduction>()?, Reduction::Mean);
    assert_eq!("SUM".parse::<Reduction>()?, Reduction::Sum);
    assert!("none".parse::<Reduction>().is_err());
    Ok(())
}

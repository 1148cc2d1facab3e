// src/autograd/grad_check.rs

use crate::error::ScalarGradError;
use crate::value::Value;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical} != numerical grad {numerical} (difference {difference})")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index} (f+: {f_plus}, f-: {f_minus})")]
    NumericalGradNotFinite {
        input_index: usize,
        f_plus: f64,
        f_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}: {value}")]
    AnalyticalGradNotFinite { input_index: usize, value: f64 },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
}

/// Checks the gradients computed by reverse propagation against central finite
/// differences.
///
/// `func` builds a scalar output from fresh leaves holding `inputs`. It is
/// called once for the analytical pass and twice per input for the numerical
/// estimate `(f(x + eps) - f(x - eps)) / (2 eps)`. A gradient passes when it
/// is within `tolerance` either absolutely or relatively.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output.backward();

    for (i, leaf) in leaves.iter().enumerate() {
        let f_plus = evaluate_shifted(&func, inputs, i, epsilon)?;
        let f_minus = evaluate_shifted(&func, inputs, i, -epsilon)?;
        let numerical = (f_plus - f_minus) / (2.0 * epsilon);
        let analytical = leaf.grad();

        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNotFinite {
                input_index: i,
                f_plus,
                f_minus,
            });
        }
        if !analytical.is_finite() {
            return Err(GradCheckError::AnalyticalGradNotFinite {
                input_index: i,
                value: analytical,
            });
        }

        if !approx::relative_eq!(
            analytical,
            numerical,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical,
                numerical,
                difference: (analytical - numerical).abs(),
            });
        }
    }

    Ok(())
}

fn evaluate_shifted<F>(
    func: &F,
    inputs: &[f64],
    index: usize,
    delta: f64,
) -> Result<f64, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    let shifted: Vec<Value> = inputs
        .iter()
        .enumerate()
        .map(|(j, &x)| Value::new(if j == index { x + delta } else { x }))
        .collect();
    let output = func(&shifted).map_err(GradCheckError::ForwardPassError)?;
    Ok(output.data())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;

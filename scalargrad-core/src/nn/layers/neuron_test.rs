// src/nn/layers/neuron_test.rs

use super::*;
use crate::utils::testing::{check_grads_near, leaves};
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn neuron_with(weights: &[f64], bias: f64, activation: Activation) -> Neuron {
    let mut rng = StdRng::seed_from_u64(0);
    let neuron = Neuron::new(weights.len(), activation, 1.0, &mut rng);
    for (w, &v) in neuron.weights().iter().zip(weights) {
        w.set_data(v);
    }
    neuron.bias().set_data(bias);
    neuron
}

#[test]
fn test_neuron_init() {
    let mut rng = StdRng::seed_from_u64(3);
    let neuron = Neuron::new(4, Activation::Tanh, 0.1, &mut rng);
    assert_eq!(neuron.nin(), 4);
    assert_eq!(neuron.bias().data(), 0.0);
    assert!(neuron.weights().iter().all(|w| w.data().abs() <= 0.1));
    assert_eq!(neuron.num_parameters(), 5);
    assert_eq!(neuron.to_string(), "Neuron(in=4, activation=tanh)");
}

#[test]
fn test_neuron_call_linear() -> Result<(), ScalarGradError> {
    let neuron = neuron_with(&[2.0, -1.0], 0.5, Activation::Linear);
    let x = leaves(&[1.0, 3.0]);
    let out = neuron.call(&x)?;
    // 0.5 + 2*1 + (-1)*3
    assert_relative_eq!(out.data(), -0.5);

    out.backward();
    check_grads_near(&neuron.parameters(), &[1.0, 3.0, 1.0], 1e-12);
    check_grads_near(&x, &[2.0, -1.0], 1e-12);
    Ok(())
}

#[test]
fn test_neuron_relu_clamps() -> Result<(), ScalarGradError> {
    let neuron = neuron_with(&[1.0], -2.0, Activation::Relu);
    let out = neuron.call(&[Value::new(1.0)])?;
    assert_relative_eq!(out.data(), 0.0);
    out.backward();
    assert_relative_eq!(neuron.weights()[0].grad(), 0.0);
    Ok(())
}

#[test]
fn test_neuron_input_size_mismatch() {
    let neuron = neuron_with(&[1.0, 1.0], 0.0, Activation::Linear);
    let result = neuron.call(&[Value::new(1.0)]);
    assert_eq!(
        result.err(),
        Some(ScalarGradError::InputSizeMismatch {
            expected: 2,
            actual: 1,
            operation: "Neuron::call".to_string(),
        })
    );
}

#[test]
fn test_neuron_parameter_order() {
    let neuron = neuron_with(&[1.0, 2.0, 3.0], 4.0, Activation::Linear);
    let data: Vec<f64> = neuron.parameters().iter().map(Value::data).collect();
    assert_eq!(data, vec![1.0, 2.0, 3.0, 4.0]);

    let names: Vec<String> = neuron.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["weight.0", "weight.1", "weight.2", "bias"]);
}

#[test]
fn test_reset_parameters_keeps_nodes() {
    let neuron = neuron_with(&[5.0, 5.0], 3.0, Activation::Linear);
    let before = neuron.parameters();
    let mut rng = StdRng::seed_from_u64(9);
    neuron.reset_parameters(&mut rng, 0.5);
    assert_eq!(before, neuron.parameters());
    assert!(neuron.weights().iter().all(|w| w.data().abs() <= 0.5));
    assert_eq!(neuron.bias().data(), 0.0);
}

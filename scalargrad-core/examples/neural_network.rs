// Trains an MLP with Adam and a max-margin loss on a noisy two-moons dataset.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use scalargrad_core::nn::{Activation, Mlp, Module, SvmLoss};
use scalargrad_core::optim::AdamOptimizer;
use scalargrad_core::training::Trainer;
use scalargrad_core::{Config, ScalarGradError};
use std::f64::consts::PI;

/// Two interleaving half circles, labels in {-1, 1}.
fn make_moons(n_samples: usize, noise: f64, rng: &mut StdRng) -> (Vec<Vec<f64>>, Vec<f64>) {
    let jitter = Normal::new(0.0, noise).expect("noise must be finite and non-negative");
    let n_outer = n_samples / 2;
    let mut x = Vec::with_capacity(n_samples);
    let mut y = Vec::with_capacity(n_samples);
    for i in 0..n_samples {
        let (px, py, label) = if i < n_outer {
            let t = PI * i as f64 / (n_outer.max(2) - 1) as f64;
            (t.cos(), t.sin(), -1.0)
        } else {
            let j = i - n_outer;
            let t = PI * j as f64 / ((n_samples - n_outer).max(2) - 1) as f64;
            (1.0 - t.cos(), 0.5 - t.sin(), 1.0)
        };
        x.push(vec![px + jitter.sample(rng), py + jitter.sample(rng)]);
        y.push(label);
    }
    // Shuffle so that sequential mini-batches mix both classes.
    let mut order: Vec<usize> = (0..n_samples).collect();
    order.shuffle(rng);
    let x = order.iter().map(|&i| x[i].clone()).collect();
    let y = order.iter().map(|&i| y[i]).collect();
    (x, y)
}

fn main() -> Result<(), ScalarGradError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("{}", "=".repeat(60));
    println!("Neural network training");
    println!("{}", "=".repeat(60));

    let config = Config::new().with_seed(42);
    let mut data_rng = StdRng::seed_from_u64(42);
    let (x, y) = make_moons(100, 0.1, &mut data_rng);
    println!("\nDataset: {} samples, {} features", x.len(), x[0].len());

    let model = Mlp::with_config(
        2,
        &[16, 16, 1],
        Some(&[Activation::Relu, Activation::Relu, Activation::Linear]),
        1.0,
        &config,
    )?;
    println!("\nModel: {}", model);
    println!("Parameters: {}", model.num_parameters());

    let optimizer = AdamOptimizer::with_defaults(model.parameters(), 0.01)?;
    let mut trainer = Trainer::new(model, optimizer, SvmLoss::new()).with_config(config);

    println!("\nTraining...");
    let history = trainer.fit(&x, &y, 50, None, None)?;

    if let Some(last) = history.last() {
        println!("\nFinal results:");
        println!("  Loss: {:.4}", last.loss);
        println!("  Accuracy: {:.2}%", last.accuracy * 100.0);
    }
    println!("\n{}", "=".repeat(60));
    Ok(())
}

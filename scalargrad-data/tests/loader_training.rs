// Feeding a trainer from a DataLoader.

use scalargrad_core::nn::{Mlp, Module, SvmLoss};
use scalargrad_core::optim::AdamOptimizer;
use scalargrad_core::training::Trainer;
use scalargrad_core::{Config, ScalarGradError};
use scalargrad_data::{samples_to_xy, DataLoader, Dataset, RandomSampler, VecDataset};

fn separable_grid() -> (Vec<Vec<f64>>, Vec<f64>) {
    let mut x = Vec::new();
    let mut y = Vec::new();
    for i in -2i32..=2 {
        for j in -2i32..=2 {
            if i + j == 0 {
                continue;
            }
            x.push(vec![i as f64 * 0.5, j as f64 * 0.5]);
            y.push(if i + j > 0 { 1.0 } else { -1.0 });
        }
    }
    (x, y)
}

#[test]
fn shuffled_mini_batches_reduce_loss() -> Result<(), ScalarGradError> {
    let (x, y) = separable_grid();
    let config = Config::new().with_seed(42);
    let dataset = VecDataset::from_xy(x.clone(), y.clone())?;
    assert_eq!(dataset.len(), 20);
    let mut loader = DataLoader::new(dataset, 5, RandomSampler::from_config(&config), false)?;
    assert_eq!(loader.num_batches(), 4);

    let model = Mlp::with_config(2, &[8, 1], None, 1.0, &config)?;
    let optimizer = AdamOptimizer::with_defaults(model.parameters(), 0.05)?;
    let mut trainer = Trainer::new(model, optimizer, SvmLoss::new()).with_config(config);

    let (initial_loss, _) = trainer.evaluate(&x, &y)?;
    for _ in 0..40 {
        loader.reset();
        let mut batches = 0;
        for batch in loader.by_ref() {
            let (bx, by) = samples_to_xy(batch?);
            let (loss, _) = trainer.train_batch(&bx, &by)?;
            assert!(loss.is_finite());
            batches += 1;
        }
        assert_eq!(batches, 4);
    }
    let (final_loss, _) = trainer.evaluate(&x, &y)?;
    assert!(final_loss < initial_loss, "loss {} -> {}", initial_loss, final_loss);
    Ok(())
}

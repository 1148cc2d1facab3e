// src/training.rs

use crate::config::Config;
use crate::error::ScalarGradError;
use crate::nn::losses::Loss;
use crate::nn::module::Module;
use crate::optim::optimizer_trait::Optimizer;
use crate::value::Value;

/// Metrics recorded for one training epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingMetrics {
    pub epoch: usize,
    pub loss: f64,
    pub accuracy: f64,
    pub val_loss: Option<f64>,
    pub val_accuracy: Option<f64>,
}

/// Drives the forward / backward / update loop for a model.
///
/// Each sample is a feature row; the model's first output is its prediction.
/// Accuracy counts predictions whose sign (`> 0`) matches the target's.
#[derive(Debug)]
pub struct Trainer<M: Module, O: Optimizer, L: Loss> {
    model: M,
    optimizer: O,
    loss_fn: L,
    config: Config,
    history: Vec<TrainingMetrics>,
}

impl<M: Module, O: Optimizer, L: Loss> Trainer<M, O, L> {
    pub fn new(model: M, optimizer: O, loss_fn: L) -> Self {
        Trainer {
            model,
            optimizer,
            loss_fn,
            config: Config::default(),
            history: Vec::new(),
        }
    }

    /// Uses `config` for every propagation (its gradient clip bound applies).
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn optimizer(&self) -> &O {
        &self.optimizer
    }

    pub fn optimizer_mut(&mut self) -> &mut O {
        &mut self.optimizer
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn history(&self) -> &[TrainingMetrics] {
        &self.history
    }

    /// One optimisation step on a batch.
    ///
    /// Returns the batch loss and the number of correctly signed predictions.
    pub fn train_batch(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<(f64, usize), ScalarGradError> {
        check_xy(x, y)?;
        let predictions = self.forward_batch(x)?;
        let loss = self.loss_fn.calculate(&predictions, y)?;

        self.optimizer.zero_grad();
        loss.backward_with(&self.config);
        self.optimizer.step()?;

        Ok((loss.data(), count_correct(&predictions, y)))
    }

    /// Runs one pass over `x` in sequential batches of `batch_size` (the whole
    /// set when `None`; the last batch may be shorter).
    ///
    /// The reported loss is the mean of the batch losses.
    pub fn train_epoch(
        &mut self,
        x: &[Vec<f64>],
        y: &[f64],
        batch_size: Option<usize>,
    ) -> Result<TrainingMetrics, ScalarGradError> {
        check_xy(x, y)?;
        let batch_size = match batch_size {
            Some(0) => {
                return Err(ScalarGradError::ConfigurationError(
                    "batch_size must be at least 1".to_string(),
                ))
            }
            Some(n) => n,
            None => x.len(),
        };

        self.model.train(true);
        let mut total_loss = 0.0;
        let mut correct = 0;
        let mut batches = 0;
        for (bx, by) in x.chunks(batch_size).zip(y.chunks(batch_size)) {
            let (loss, batch_correct) = self.train_batch(bx, by)?;
            log::trace!("Batch {}: loss={:.6}", batches, loss);
            total_loss += loss;
            correct += batch_correct;
            batches += 1;
        }

        Ok(TrainingMetrics {
            epoch: self.history.len(),
            loss: total_loss / batches as f64,
            accuracy: correct as f64 / x.len() as f64,
            val_loss: None,
            val_accuracy: None,
        })
    }

    /// Loss and accuracy on `x`/`y` without updating parameters.
    ///
    /// The model is put in evaluation mode for the duration of the call and
    /// restored afterwards.
    pub fn evaluate(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<(f64, f64), ScalarGradError> {
        check_xy(x, y)?;
        let was_training = self.model.is_training();
        self.model.eval();
        let result = self.forward_batch(x).and_then(|predictions| {
            let loss = self.loss_fn.calculate(&predictions, y)?;
            let accuracy = count_correct(&predictions, y) as f64 / x.len() as f64;
            Ok((loss.data(), accuracy))
        });
        self.model.train(was_training);
        result
    }

    /// Raw model outputs (first output per sample).
    pub fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>, ScalarGradError> {
        Ok(self.forward_batch(x)?.iter().map(Value::data).collect())
    }

    /// Trains for `epochs` epochs, appending one entry per epoch to the
    /// history. With `validation`, each entry also carries validation metrics.
    pub fn fit(
        &mut self,
        x: &[Vec<f64>],
        y: &[f64],
        epochs: usize,
        batch_size: Option<usize>,
        validation: Option<(&[Vec<f64>], &[f64])>,
    ) -> Result<&[TrainingMetrics], ScalarGradError> {
        let log_every = (epochs / 10).max(1);
        for epoch in 0..epochs {
            let mut metrics = self.train_epoch(x, y, batch_size)?;
            if let Some((vx, vy)) = validation {
                let (val_loss, val_accuracy) = self.evaluate(vx, vy)?;
                metrics.val_loss = Some(val_loss);
                metrics.val_accuracy = Some(val_accuracy);
            }
            if epoch % log_every == 0 {
                match (metrics.val_loss, metrics.val_accuracy) {
                    (Some(vl), Some(va)) => log::info!(
                        "Epoch {}: loss={:.4}, acc={:.2}%, val_loss={:.4}, val_acc={:.2}%",
                        metrics.epoch,
                        metrics.loss,
                        metrics.accuracy * 100.0,
                        vl,
                        va * 100.0
                    ),
                    _ => log::info!(
                        "Epoch {}: loss={:.4}, acc={:.2}%",
                        metrics.epoch,
                        metrics.loss,
                        metrics.accuracy * 100.0
                    ),
                }
            }
            self.history.push(metrics);
        }
        Ok(&self.history)
    }

    fn forward_batch(&self, x: &[Vec<f64>]) -> Result<Vec<Value>, ScalarGradError> {
        x.iter()
            .map(|row| {
                let inputs: Vec<Value> = row.iter().map(|&v| Value::new(v)).collect();
                self.model
                    .forward(&inputs)?
                    .into_iter()
                    .next()
                    .ok_or_else(|| ScalarGradError::EmptyInput("model produced no output".to_string()))
            })
            .collect()
    }
}

fn check_xy(x: &[Vec<f64>], y: &[f64]) -> Result<(), ScalarGradError> {
    if x.len() != y.len() {
        return Err(ScalarGradError::InputSizeMismatch {
            expected: x.len(),
            actual: y.len(),
            operation: "Trainer".to_string(),
        });
    }
    if x.is_empty() {
        return Err(ScalarGradError::EmptyInput("training set is empty".to_string()));
    }
    Ok(())
}

fn count_correct(predictions: &[Value], targets: &[f64]) -> usize {
    predictions
        .iter()
        .zip(targets)
        .filter(|&(p, &t)| (p.data() > 0.0) == (t > 0.0))
        .count()
}

#[cfg(test)]
#[path = "training_test.rs"]
mod tests;

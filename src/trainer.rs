//! Deterministic train/test partitioning and classifier evaluation

use crate::classifier::{self, Classifier};
use crate::config::ClassifierConfig;
use crate::error::PipelineError;
use crate::label::LabeledRecord;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::info;

/// Held-out evaluation of one trained classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub accuracy: f64,
    pub train_size: usize,
    pub test_size: usize,
}

/// Splits the labeled rows with the fixed seed, trains the configured
/// strategy on the training partition, and scores it on the held-out
/// partition. Reruns on identical input reproduce identical splits.
pub fn train_and_evaluate(
    labeled: &[LabeledRecord],
    config: &ClassifierConfig,
) -> Result<(Box<dyn Classifier>, Evaluation), PipelineError> {
    let (train_idx, test_idx) =
        split_indices(labeled.len(), config.test_fraction, config.split_seed);
    if train_idx.is_empty() {
        return Err(PipelineError::Training(
            "training partition is empty".into(),
        ));
    }

    let (train_x, train_y) = gather(labeled, &train_idx);
    let (test_x, test_y) = gather(labeled, &test_idx);

    let mut model = classifier::build(config);
    model.fit(&train_x, &train_y)?;

    let predictions: Vec<bool> = test_x.iter().map(|&s| model.predict(s)).collect();
    let evaluation = Evaluation {
        accuracy: accuracy(&predictions, &test_y),
        train_size: train_idx.len(),
        test_size: test_idx.len(),
    };
    info!(
        "trained {:?} on {} rows, accuracy {:.2} on {} held-out rows",
        config.strategy, evaluation.train_size, evaluation.accuracy, evaluation.test_size
    );
    Ok((model, evaluation))
}

/// Shuffles `0..n` with a seeded rng and cuts off the test partition.
/// At least one sample always lands in the test partition.
fn split_indices(n: usize, test_fraction: f64, seed: u64) -> (Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let n_test = ((n as f64 * test_fraction).round() as usize).clamp(1, n.saturating_sub(1).max(1));
    let n_train = n.saturating_sub(n_test);
    let test = indices.split_off(n_train);
    (indices, test)
}

fn gather(labeled: &[LabeledRecord], indices: &[usize]) -> (Vec<[f64; 2]>, Vec<bool>) {
    let features = indices.iter().map(|&i| labeled[i].features).collect();
    let labels = indices.iter().map(|&i| labeled[i].label).collect();
    (features, labels)
}

fn accuracy(predictions: &[bool], truth: &[bool]) -> f64 {
    if truth.is_empty() {
        return 0.0;
    }
    let correct = predictions
        .iter()
        .zip(truth.iter())
        .filter(|(p, t)| p == t)
        .count();
    correct as f64 / truth.len() as f64
}

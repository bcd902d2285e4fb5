//! Binary classifier strategies over (CPU%, Memory%) features

mod boosting;
mod forest;
mod tree;

pub use boosting::GradientBoostedTrees;
pub use forest::RandomForest;
pub use tree::DecisionTree;

use crate::config::{ClassifierConfig, ClassifierStrategy};
use crate::error::PipelineError;

/// A trainable binary decision function. Trained fresh each run and
/// discarded at exit; never persisted across runs.
pub trait Classifier {
    fn fit(&mut self, features: &[[f64; 2]], labels: &[bool]) -> Result<(), PipelineError>;
    fn predict(&self, sample: [f64; 2]) -> bool;
}

/// Builds the strategy selected in configuration.
pub fn build(config: &ClassifierConfig) -> Box<dyn Classifier> {
    match config.strategy {
        ClassifierStrategy::GradientBoosting => Box::new(GradientBoostedTrees::new(
            config.n_estimators,
            config.learning_rate,
            config.max_depth,
        )),
        ClassifierStrategy::RandomForest => Box::new(RandomForest::new(
            config.n_estimators,
            config.max_depth,
            config.split_seed,
        )),
    }
}

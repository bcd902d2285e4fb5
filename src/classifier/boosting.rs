//! Gradient boosting over decision trees

use super::{Classifier, DecisionTree};
use crate::error::PipelineError;

/// Gradient-boosted ensemble of depth-limited trees.
///
/// Starts from the log-odds of the positive class, then each round fits a
/// tree to the sign of the pseudo-residuals `y - p` and nudges the raw
/// score by `learning_rate` in the direction the tree chose. Prediction is
/// the sigmoid of the accumulated score.
#[derive(Debug, Clone)]
pub struct GradientBoostedTrees {
    n_estimators: usize,
    learning_rate: f64,
    max_depth: usize,
    init_score: f64,
    trees: Vec<DecisionTree>,
}

impl GradientBoostedTrees {
    pub fn new(n_estimators: usize, learning_rate: f64, max_depth: usize) -> Self {
        GradientBoostedTrees {
            n_estimators,
            learning_rate,
            max_depth,
            init_score: 0.0,
            trees: Vec::new(),
        }
    }

    fn sigmoid(x: f64) -> f64 {
        1.0 / (1.0 + (-x).exp())
    }
}

impl Classifier for GradientBoostedTrees {
    fn fit(&mut self, features: &[[f64; 2]], labels: &[bool]) -> Result<(), PipelineError> {
        if features.len() != labels.len() {
            return Err(PipelineError::Training(
                "feature and label counts differ".into(),
            ));
        }
        if features.is_empty() {
            return Err(PipelineError::Training("cannot fit with 0 samples".into()));
        }

        let n = features.len();
        let positives = labels.iter().filter(|&&l| l).count();
        let p = positives as f64 / n as f64;
        self.init_score = if p > 0.0 && p < 1.0 {
            (p / (1.0 - p)).ln()
        } else if p >= 1.0 {
            5.0
        } else {
            -5.0
        };

        let mut raw_scores = vec![self.init_score; n];
        self.trees = Vec::with_capacity(self.n_estimators);

        for _ in 0..self.n_estimators {
            // Residual sign stands in for the pseudo-residual magnitude:
            // positive residual means the score must move toward class 1.
            let residual_labels: Vec<bool> = labels
                .iter()
                .zip(raw_scores.iter())
                .map(|(&y, &raw)| (y as u8 as f64) - Self::sigmoid(raw) >= 0.0)
                .collect();

            let mut tree = DecisionTree::new(self.max_depth);
            tree.fit(features, &residual_labels)?;

            for (i, sample) in features.iter().enumerate() {
                let direction = if tree.predict(*sample) { 1.0 } else { -1.0 };
                raw_scores[i] += self.learning_rate * direction;
            }
            self.trees.push(tree);
        }
        Ok(())
    }

    fn predict(&self, sample: [f64; 2]) -> bool {
        let mut raw = self.init_score;
        for tree in &self.trees {
            let direction = if tree.predict(sample) { 1.0 } else { -1.0 };
            raw += self.learning_rate * direction;
        }
        Self::sigmoid(raw) >= 0.5
    }
}

//! Random forest fallback strategy

use super::{Classifier, DecisionTree};
use crate::error::PipelineError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Bagged ensemble of decision trees with majority voting. Each tree
/// trains on a bootstrap sample drawn from an rng derived from the run
/// seed, so the whole forest is reproducible.
#[derive(Debug, Clone)]
pub struct RandomForest {
    n_estimators: usize,
    max_depth: usize,
    seed: u64,
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn new(n_estimators: usize, max_depth: usize, seed: u64) -> Self {
        RandomForest {
            n_estimators,
            max_depth,
            seed,
            trees: Vec::new(),
        }
    }
}

impl Classifier for RandomForest {
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
        self.trees = Vec::with_capacity(self.n_estimators);

        for t in 0..self.n_estimators {
            let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(t as u64));
            let mut boot_x = Vec::with_capacity(n);
            let mut boot_y = Vec::with_capacity(n);
            for _ in 0..n {
                let i = rng.gen_range(0..n);
                boot_x.push(features[i]);
                boot_y.push(labels[i]);
            }

            let mut tree = DecisionTree::new(self.max_depth);
            tree.fit(&boot_x, &boot_y)?;
            self.trees.push(tree);
        }
        Ok(())
    }

    fn predict(&self, sample: [f64; 2]) -> bool {
        let votes = self.trees.iter().filter(|t| t.predict(sample)).count();
        votes * 2 >= self.trees.len().max(1)
    }
}

//! CART decision tree (Gini impurity), the weak learner for both ensembles

use super::Classifier;
use crate::error::PipelineError;

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        label: bool,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// Depth-limited binary classification tree. The threshold search is
/// exhaustive over midpoints of adjacent distinct feature values, so
/// fitting is fully deterministic.
#[derive(Debug, Clone)]
pub struct DecisionTree {
    root: Option<Node>,
    max_depth: usize,
    min_samples_split: usize,
}

impl DecisionTree {
    pub fn new(max_depth: usize) -> Self {
        DecisionTree {
            root: None,
            max_depth,
            min_samples_split: 2,
        }
    }

    fn build(&self, x: &[[f64; 2]], y: &[bool], indices: &[usize], depth: usize) -> Node {
        let positives = indices.iter().filter(|&&i| y[i]).count();
        let majority = positives * 2 >= indices.len();

        if depth >= self.max_depth
            || indices.len() < self.min_samples_split
            || positives == 0
            || positives == indices.len()
        {
            return Node::Leaf { label: majority };
        }

        match best_split(x, y, indices) {
            Some((feature, threshold, left_idx, right_idx)) => Node::Split {
                feature,
                threshold,
                left: Box::new(self.build(x, y, &left_idx, depth + 1)),
                right: Box::new(self.build(x, y, &right_idx, depth + 1)),
            },
            None => Node::Leaf { label: majority },
        }
    }
}

impl Classifier for DecisionTree {
    fn fit(&mut self, features: &[[f64; 2]], labels: &[bool]) -> Result<(), PipelineError> {
        if features.len() != labels.len() {
            return Err(PipelineError::Training(
                "feature and label counts differ".into(),
            ));
        }
        if features.is_empty() {
            return Err(PipelineError::Training("cannot fit with 0 samples".into()));
        }
        let indices: Vec<usize> = (0..features.len()).collect();
        self.root = Some(self.build(features, labels, &indices, 0));
        Ok(())
    }

    fn predict(&self, sample: [f64; 2]) -> bool {
        let mut node = match &self.root {
            Some(root) => root,
            None => return false,
        };
        loop {
            match node {
                Node::Leaf { label } => return *label,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if sample[*feature] <= *threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }
}

fn gini(positives: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let p = positives as f64 / total as f64;
    2.0 * p * (1.0 - p)
}

/// Finds the (feature, threshold) pair minimizing weighted Gini impurity.
/// Returns `None` when no split separates the samples.
#[allow(clippy::type_complexity)]
fn best_split(
    x: &[[f64; 2]],
    y: &[bool],
    indices: &[usize],
) -> Option<(usize, f64, Vec<usize>, Vec<usize>)> {
    let total = indices.len();
    let parent_positives = indices.iter().filter(|&&i| y[i]).count();
    let parent_impurity = gini(parent_positives, total);

    let mut best: Option<(usize, f64, f64)> = None;

    for feature in 0..2 {
        let mut values: Vec<f64> = indices.iter().map(|&i| x[i][feature]).collect();
        values.sort_by(f64::total_cmp);
        values.dedup();

        for pair in values.windows(2) {
            let threshold = (pair[0] + pair[1]) / 2.0;
            let mut left_total = 0;
            let mut left_positives = 0;
            for &i in indices {
                if x[i][feature] <= threshold {
                    left_total += 1;
                    if y[i] {
                        left_positives += 1;
                    }
                }
            }
            let right_total = total - left_total;
            if left_total == 0 || right_total == 0 {
                continue;
            }
            let right_positives = parent_positives - left_positives;
            let weighted = (left_total as f64 * gini(left_positives, left_total)
                + right_total as f64 * gini(right_positives, right_total))
                / total as f64;

            if weighted < parent_impurity
                && best.map_or(true, |(_, _, impurity)| weighted < impurity)
            {
                best = Some((feature, threshold, weighted));
            }
        }
    }

    best.map(|(feature, threshold, _)| {
        let (left_idx, right_idx) = indices
            .iter()
            .copied()
            .partition(|&i| x[i][feature] <= threshold);
        (feature, threshold, left_idx, right_idx)
    })
}

//! Feature and ground-truth label derivation

use crate::error::PipelineError;
use crate::normalize::NormalizedRecord;

/// A normalized record reduced to its feature vector and removable label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledRecord {
    pub features: [f64; 2],
    pub label: bool,
}

/// Builds one labeled record per normalized record.
///
/// The label is `cpu + memory > threshold`; a combined usage of exactly
/// the threshold labels `false`. Non-finite feature values are zero-filled
/// so the trainer never sees them.
///
/// Fails with `LabelDiversity` when every row lands in the same class,
/// which would leave the classifier undefined.
pub fn build(
    records: &[NormalizedRecord],
    threshold: f64,
) -> Result<Vec<LabeledRecord>, PipelineError> {
    let labeled: Vec<LabeledRecord> = records
        .iter()
        .map(|r| {
            let cpu = zero_fill(r.cpu_percent);
            let memory = zero_fill(r.memory_percent);
            LabeledRecord {
                features: [cpu, memory],
                label: cpu + memory > threshold,
            }
        })
        .collect();

    let positives = labeled.iter().filter(|r| r.label).count();
    if positives == 0 || positives == labeled.len() {
        return Err(PipelineError::LabelDiversity);
    }
    Ok(labeled)
}

fn zero_fill(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

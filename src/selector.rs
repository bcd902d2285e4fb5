//! Candidate filtering and ranking

use crate::classifier::Classifier;
use crate::normalize::NormalizedRecord;
use serde::Serialize;

/// One process proposed to the operator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "CPU%")]
    pub cpu_percent: f64,
    #[serde(rename = "Memory%")]
    pub memory_percent: f64,
}

impl Candidate {
    fn from_record(record: &NormalizedRecord) -> Self {
        Candidate {
            name: record.name.clone(),
            cpu_percent: record.cpu_percent,
            memory_percent: record.memory_percent,
        }
    }

    pub fn combined_usage(&self) -> f64 {
        self.cpu_percent + self.memory_percent
    }
}

/// Rows the classifier marks removable that also sit under the usage
/// ceiling on both metrics. An empty result is a valid outcome.
pub fn removable_candidates(
    records: &[NormalizedRecord],
    model: &dyn Classifier,
    usage_ceiling: f64,
) -> Vec<Candidate> {
    records
        .iter()
        .filter(|r| {
            model.predict([r.cpu_percent, r.memory_percent])
                && r.cpu_percent < usage_ceiling
                && r.memory_percent < usage_ceiling
        })
        .map(|r| Candidate::from_record(r))
        .collect()
}

/// The `n` records with the highest combined usage, regardless of the
/// classifier's verdict. The sort is stable, so ties keep input order.
pub fn top_consumers(records: &[NormalizedRecord], n: usize) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = records
        .iter()
        .map(|r| Candidate::from_record(r))
        .collect();
    candidates.sort_by(|a, b| b.combined_usage().total_cmp(&a.combined_usage()));
    candidates.truncate(n);
    candidates
}

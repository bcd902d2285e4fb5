//! Stage orchestration for one advisory run

use crate::config::Config;
use crate::dataset::{self, Manifest};
use crate::error::PipelineError;
use crate::selector::{self, Candidate};
use crate::trainer::{self, Evaluation};
use crate::{baseline, label, normalize, publisher};
use std::path::PathBuf;
use tracing::info;

/// Everything a run surfaces to the operator. The top-consumer table is
/// also what lands in the artifact; the removable set is report-only.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub evaluation: Evaluation,
    pub removable: Vec<Candidate>,
    pub top_consumers: Vec<Candidate>,
    pub artifact: PathBuf,
}

/// Executes the pipeline once: baseline, normalization, labeling,
/// training, selection, publication. Strictly linear and synchronous;
/// every stage completes before the next begins. On any fatal error the
/// previous artifact is left untouched.
pub fn run(manifest: &Manifest, config: &Config) -> Result<RunReport, PipelineError> {
    if manifest.snapshots.is_empty() {
        return Err(PipelineError::MissingSnapshotData);
    }

    let reference_rows = dataset::load_reference_rows(manifest);
    let baseline = baseline::estimate(&reference_rows);
    info!(
        "baseline from {} reference rows: cpu={:.2} mem={:.2}",
        reference_rows.len(),
        baseline.avg_cpu_percent,
        baseline.avg_memory_percent
    );

    let snapshot_rows = dataset::load_snapshot_rows(manifest)?;
    let records = normalize::normalize(snapshot_rows, &baseline);
    if records.is_empty() {
        return Err(PipelineError::MissingSnapshotData);
    }

    let labeled = label::build(&records, config.labeling.combined_threshold)?;
    let (model, evaluation) = trainer::train_and_evaluate(&labeled, &config.classifier)?;

    let removable =
        selector::removable_candidates(&records, model.as_ref(), config.selection.usage_ceiling);
    let top_consumers = selector::top_consumers(&records, config.selection.top_n);

    publisher::publish(&top_consumers, &config.output.artifact)?;

    Ok(RunReport {
        evaluation,
        removable,
        top_consumers,
        artifact: config.output.artifact.clone(),
    })
}

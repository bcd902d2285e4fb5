//! Snapshot and reference dataset loading (CSV)

use crate::error::PipelineError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Explicit set of input files for one run. Discovery policy (globbing,
/// "most recent file" lookups) belongs to the invoking collaborator.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    pub snapshots: Vec<PathBuf>,
    pub references: Vec<PathBuf>,
}

/// One raw usage row. Snapshot files carry additional columns
/// (`PID`, `Status`, `Create Time`) which the pipeline ignores.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "CPU%")]
    pub cpu_percent: Option<f64>,
    #[serde(rename = "Memory%")]
    pub memory_percent: Option<f64>,
}

/// Reads all rows from one CSV file. Rows that fail to deserialize are
/// excluded and logged; they never abort the run on their own.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>, PipelineError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| PipelineError::DatasetRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut rows = Vec::new();
    for result in reader.deserialize::<RawRow>() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => warn!("skipping malformed row in {}: {}", path.display(), e),
        }
    }
    Ok(rows)
}

/// Concatenates snapshot rows across the manifest. A missing or unreadable
/// snapshot file is fatal; the run has nothing trustworthy to classify.
pub fn load_snapshot_rows(manifest: &Manifest) -> Result<Vec<RawRow>, PipelineError> {
    let mut rows = Vec::new();
    for path in &manifest.snapshots {
        rows.extend(read_rows(path)?);
    }
    Ok(rows)
}

/// Concatenates reference rows across the manifest. Absent or unreadable
/// reference data is not an error; the baseline falls back to its default.
pub fn load_reference_rows(manifest: &Manifest) -> Vec<RawRow> {
    let mut rows = Vec::new();
    for path in &manifest.references {
        match read_rows(path) {
            Ok(mut r) => rows.append(&mut r),
            Err(e) => warn!("ignoring unreadable reference dataset: {}", e),
        }
    }
    rows
}

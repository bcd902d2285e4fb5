//! Pipeline error taxonomy

use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions that stop a run. Recoverable conditions (missing
/// reference data, malformed rows, overflow during rescaling) are handled
/// at the stage that detects them and never reach this type.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no usable snapshot rows found; nothing to classify")]
    MissingSnapshotData,

    #[error("all rows received the same removable label; training would be undefined")]
    LabelDiversity,

    #[error("failed to read snapshot dataset {path}")]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("classifier training failed: {0}")]
    Training(String),

    #[error("failed to write candidate artifact {path}")]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

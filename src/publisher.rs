//! Candidate artifact writer (CSV)

use crate::error::PipelineError;
use crate::selector::Candidate;
use std::path::Path;
use tracing::info;

/// Overwrites the artifact at `path` with the ranked candidate table.
/// Columns: `Name, CPU%, Memory%`. No append semantics, no versioning.
pub fn publish(candidates: &[Candidate], path: &Path) -> Result<(), PipelineError> {
    let write_err = |source| PipelineError::ArtifactWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(write_err)?;
    for candidate in candidates {
        writer.serialize(candidate).map_err(write_err)?;
    }
    writer.flush().map_err(|e| write_err(csv::Error::from(e)))?;
    info!("wrote {} candidates to {}", candidates.len(), path.display());
    Ok(())
}

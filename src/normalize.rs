//! Usage normalization against the reference baseline

use crate::baseline::BaselineUsage;
use crate::dataset::RawRow;
use tracing::debug;

/// Placeholder name emitted by snapshot collectors for processes they
/// could not identify; such rows carry no usable signal.
pub const UNKNOWN_PROCESS: &str = "Unknown Process";

/// A usage observation rescaled to a bounded, baseline-relative percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    pub name: String,
    pub cpu_percent: f64,
    pub memory_percent: f64,
}

/// Drops invalid rows and rescales the rest against the baseline.
///
/// A row is invalid when its name or either metric is missing, or when the
/// name is the `"Unknown Process"` sentinel. A metric that parsed as NaN
/// counts as missing. Rescaled values map division overflow to exactly 100
/// and are clamped to `[0, 100]`.
pub fn normalize(rows: Vec<RawRow>, baseline: &BaselineUsage) -> Vec<NormalizedRecord> {
    let total = rows.len();
    let records: Vec<NormalizedRecord> = rows
        .into_iter()
        .filter_map(|row| {
            let name = row.name.filter(|n| n.as_str() != UNKNOWN_PROCESS)?;
            let cpu = row.cpu_percent.filter(|v| !v.is_nan())?;
            let memory = row.memory_percent.filter(|v| !v.is_nan())?;
            Some(NormalizedRecord {
                name,
                cpu_percent: rescale(cpu, baseline.avg_cpu_percent),
                memory_percent: rescale(memory, baseline.avg_memory_percent),
            })
        })
        .collect();
    debug!(
        "normalized {} of {} snapshot rows (baseline cpu={:.2} mem={:.2})",
        records.len(),
        total,
        baseline.avg_cpu_percent,
        baseline.avg_memory_percent
    );
    records
}

fn rescale(value: f64, baseline: f64) -> f64 {
    let scaled = value / baseline * 100.0;
    if !scaled.is_finite() {
        // Second safety net behind the baseline floor.
        return 100.0;
    }
    scaled.clamp(0.0, 100.0)
}

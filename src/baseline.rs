//! Baseline estimation from historical reference data

use crate::dataset::RawRow;

/// Floor applied to both baseline components so normalization can never
/// divide by a near-zero denominator.
pub const BASELINE_FLOOR: f64 = 1.0;

/// Reference-scale usage averages used as the normalization denominator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineUsage {
    pub avg_cpu_percent: f64,
    pub avg_memory_percent: f64,
}

impl Default for BaselineUsage {
    fn default() -> Self {
        BaselineUsage {
            avg_cpu_percent: BASELINE_FLOOR,
            avg_memory_percent: BASELINE_FLOOR,
        }
    }
}

/// Computes the mean CPU% and Memory% across all reference rows.
/// No rows, or rows without a usable value for a metric, leave that
/// component at the default; both components are floored at 1.
pub fn estimate(rows: &[RawRow]) -> BaselineUsage {
    BaselineUsage {
        avg_cpu_percent: mean(rows.iter().filter_map(|r| r.cpu_percent)).max(BASELINE_FLOOR),
        avg_memory_percent: mean(rows.iter().filter_map(|r| r.memory_percent)).max(BASELINE_FLOOR),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0u64;
    for v in values.filter(|v| v.is_finite()) {
        sum += v;
        count += 1;
    }
    if count == 0 {
        BASELINE_FLOOR
    } else {
        sum / count as f64
    }
}

use proc_advisor::baseline::{self, BaselineUsage};
use proc_advisor::dataset;
use proc_advisor::error::PipelineError;
use proc_advisor::label;
use proc_advisor::normalize::{self, NormalizedRecord};
use std::io::Write;
use tempfile::NamedTempFile;

fn csv_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_baseline_defaults_without_reference_rows() {
    let baseline = baseline::estimate(&[]);
    assert_eq!(baseline, BaselineUsage::default());
    assert_eq!(baseline.avg_cpu_percent, 1.0);
    assert_eq!(baseline.avg_memory_percent, 1.0);
}

#[test]
fn test_baseline_floors_small_averages() {
    let file = csv_file("Name,CPU%,Memory%\na,0.1,0.2\nb,0.3,0.4\n");
    let rows = dataset::read_rows(file.path()).unwrap();
    let baseline = baseline::estimate(&rows);
    // Averages of 0.2 and 0.3 are floored to 1 to keep division safe.
    assert_eq!(baseline.avg_cpu_percent, 1.0);
    assert_eq!(baseline.avg_memory_percent, 1.0);
}

#[test]
fn test_baseline_means_present_values() {
    let file = csv_file("Name,CPU%,Memory%\na,40,10\nb,60,30\n");
    let rows = dataset::read_rows(file.path()).unwrap();
    let baseline = baseline::estimate(&rows);
    assert_eq!(baseline.avg_cpu_percent, 50.0);
    assert_eq!(baseline.avg_memory_percent, 20.0);
}

#[test]
fn test_baseline_handles_missing_column() {
    // Reference file without a CPU% column: that component stays at 1.
    let file = csv_file("Memory%\n50\n70\n");
    let rows = dataset::read_rows(file.path()).unwrap();
    let baseline = baseline::estimate(&rows);
    assert_eq!(baseline.avg_cpu_percent, 1.0);
    assert_eq!(baseline.avg_memory_percent, 60.0);
}

#[test]
fn test_read_rows_skips_malformed_rows() {
    let file = csv_file("Name,CPU%,Memory%\ngood,1,2\nbad,not-a-number,3\nalso_good,4,5\n");
    let rows = dataset::read_rows(file.path()).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name.as_deref(), Some("good"));
    assert_eq!(rows[1].name.as_deref(), Some("also_good"));
}

#[test]
fn test_read_rows_ignores_extra_columns() {
    let file = csv_file(
        "PID,Name,Status,CPU%,Memory%,Create Time\n1,proc,running,2.5,3.5,2024-01-01 00:00:00\n",
    );
    let rows = dataset::read_rows(file.path()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].cpu_percent, Some(2.5));
    assert_eq!(rows[0].memory_percent, Some(3.5));
}

#[test]
fn test_normalize_drops_invalid_rows() {
    let file = csv_file(
        "Name,CPU%,Memory%\nUnknown Process,99,99\n,1,1\nmissing_mem,1,\nkept,2,3\n",
    );
    let rows = dataset::read_rows(file.path()).unwrap();
    let records = normalize::normalize(rows, &BaselineUsage::default());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "kept");
}

#[test]
fn test_normalize_drops_nan_metrics() {
    // A literal NaN parses as a present value but carries no reading;
    // it counts as a missing metric, not as overflow.
    let file = csv_file("Name,CPU%,Memory%\nghost,NaN,2\nspook,3,NaN\nkept,4,5\n");
    let rows = dataset::read_rows(file.path()).unwrap();
    let records = normalize::normalize(rows, &BaselineUsage::default());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "kept");
}

#[test]
fn test_normalize_maps_infinity_to_exactly_100() {
    let file = csv_file("Name,CPU%,Memory%\nrunaway,inf,1\n");
    let rows = dataset::read_rows(file.path()).unwrap();
    let records = normalize::normalize(rows, &BaselineUsage::default());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].cpu_percent, 100.0);
    assert_eq!(records[0].memory_percent, 100.0);
}

#[test]
fn test_normalize_rescales_against_baseline() {
    let file = csv_file("Name,CPU%,Memory%\na,25,10\n");
    let rows = dataset::read_rows(file.path()).unwrap();
    let baseline = BaselineUsage {
        avg_cpu_percent: 50.0,
        avg_memory_percent: 50.0,
    };
    let records = normalize::normalize(rows, &baseline);
    assert_eq!(records[0].cpu_percent, 50.0);
    assert_eq!(records[0].memory_percent, 20.0);
}

#[test]
fn test_normalize_clamps_to_bounded_percentage() {
    // 200 against a baseline of 50 rescales to 400 and must clamp to
    // exactly 100; negative readings clamp to 0.
    let file = csv_file("Name,CPU%,Memory%\na,200,-5\n");
    let rows = dataset::read_rows(file.path()).unwrap();
    let baseline = BaselineUsage {
        avg_cpu_percent: 50.0,
        avg_memory_percent: 50.0,
    };
    let records = normalize::normalize(rows, &baseline);
    assert_eq!(records[0].cpu_percent, 100.0);
    assert_eq!(records[0].memory_percent, 0.0);
}

#[test]
fn test_normalize_clamp_is_idempotent_on_bounded_input() {
    let file = csv_file("Name,CPU%,Memory%\na,0.73,0.25\n");
    let rows = dataset::read_rows(file.path()).unwrap();
    let records = normalize::normalize(rows, &BaselineUsage::default());
    // Bounded after rescaling by 100/1; clamping changed nothing.
    assert_eq!(records[0].cpu_percent, 73.0);
    assert_eq!(records[0].memory_percent, 25.0);
}

fn record(name: &str, cpu: f64, memory: f64) -> NormalizedRecord {
    NormalizedRecord {
        name: name.to_string(),
        cpu_percent: cpu,
        memory_percent: memory,
    }
}

#[test]
fn test_label_threshold_boundary() {
    let records = vec![record("over", 6.0, 5.0), record("exact", 5.0, 5.0)];
    let labeled = label::build(&records, 10.0).unwrap();
    assert!(labeled[0].label);
    // Combined usage of exactly the threshold is not removable.
    assert!(!labeled[1].label);
}

#[test]
fn test_label_zero_fills_non_finite_features() {
    let records = vec![record("nan", f64::NAN, 50.0), record("low", 1.0, 1.0)];
    let labeled = label::build(&records, 10.0).unwrap();
    assert_eq!(labeled[0].features, [0.0, 50.0]);
    assert!(labeled[0].label);
}

#[test]
fn test_label_requires_both_classes() {
    let records = vec![record("x", 50.0, 50.0), record("y", 40.0, 40.0)];
    let err = label::build(&records, 10.0).unwrap_err();
    assert!(matches!(err, PipelineError::LabelDiversity));

    let records = vec![record("x", 1.0, 1.0), record("y", 2.0, 2.0)];
    let err = label::build(&records, 10.0).unwrap_err();
    assert!(matches!(err, PipelineError::LabelDiversity));
}

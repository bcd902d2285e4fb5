//! Configuration management (TOML)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub classifier: ClassifierConfig,
    pub labeling: LabelingConfig,
    pub selection: SelectionConfig,
    pub output: OutputConfig,
}

/// Closed set of trainable strategies; replaces string-keyed model lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierStrategy {
    GradientBoosting,
    RandomForest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub strategy: ClassifierStrategy,
    /// Share of labeled rows held out for evaluation.
    pub test_fraction: f64,
    /// Fixed seed so reruns on identical input reproduce identical splits.
    pub split_seed: u64,
    pub n_estimators: usize,
    pub learning_rate: f64,
    pub max_depth: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelingConfig {
    /// Combined CPU+memory percentage above which a row is labeled removable.
    pub combined_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Per-metric ceiling for the removable-candidate filter.
    pub usage_ceiling: f64,
    /// Maximum number of rows in the published ranking.
    pub top_n: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub artifact: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            classifier: ClassifierConfig {
                strategy: ClassifierStrategy::GradientBoosting,
                test_fraction: 0.2,
                split_seed: 42,
                n_estimators: 100,
                learning_rate: 0.1,
                max_depth: 3,
            },
            labeling: LabelingConfig {
                combined_threshold: 10.0,
            },
            selection: SelectionConfig {
                usage_ceiling: 30.0,
                top_n: 5,
            },
            output: OutputConfig {
                artifact: PathBuf::from("removable_apps.csv"),
            },
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "proc-advisor")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

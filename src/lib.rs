//! Core pipeline for ranking low-value processes from usage snapshots.

pub mod baseline;
pub mod classifier;
pub mod config;
pub mod dataset;
pub mod error;
pub mod label;
pub mod normalize;
pub mod pipeline;
pub mod publisher;
pub mod report;
pub mod selector;
pub mod trainer;

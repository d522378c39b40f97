//! Stable DTOs and IDs used across the hardscore workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted score report
//! - stable string IDs for the baseline checks
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod report;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use report::{CheckResult, SCHEMA_CONFIG_V1, SCHEMA_REPORT_V1, ScoreReport};

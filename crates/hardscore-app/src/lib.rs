//! Use case orchestration for hardscore.
//!
//! This crate provides the application layer: use cases that coordinate the domain, evidence,
//! settings and render layers. It is intentionally thin and delegates heavy lifting to them.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod audit;
mod explain;
mod list;
mod render;
mod report;

pub use audit::{AuditInput, AuditOutput, load_registry, resolve, run_audit};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use list::format_registry;
pub use render::{render_markdown, render_summary};
pub use report::{parse_report_json, serialize_report};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stable schema identifiers. The report itself carries no schema field; these
/// name the JSON schema documents emitted by `cargo xtask emit-schemas`.
pub const SCHEMA_REPORT_V1: &str = "hardscore.report.v1";
pub const SCHEMA_CONFIG_V1: &str = "hardscore.config.v1";

/// Outcome of one check. Field order is part of the wire format: `ok`, `msg`, `weight`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckResult {
    #[serde(rename = "ok")]
    pub passed: bool,

    /// Human-readable check name.
    #[serde(rename = "msg")]
    pub name: String,

    /// Declared weight of the check, reported whether or not it passed.
    pub weight: u32,
}

/// The single document emitted by one evaluation pass.
///
/// `max_score` is a policy ceiling and is not derived from the registered weights.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreReport {
    pub score: u32,
    #[serde(rename = "max")]
    pub max_score: u32,
    pub checks: Vec<CheckResult>,
}

impl ScoreReport {
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }
}

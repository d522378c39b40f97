use crate::evidence::Evidence;
use crate::model::CheckRegistry;
use hardscore_types::{CheckResult, ScoreReport};

/// Run every check once, in registration order, and fold the outcomes into a report.
///
/// Evidence failures are already `false` by the time they reach the fold, so one check can
/// never abort the pass.
pub fn evaluate(registry: &CheckRegistry, evidence: &dyn Evidence) -> ScoreReport {
    let checks: Vec<CheckResult> = registry
        .checks()
        .iter()
        .map(|check| CheckResult {
            passed: check.probe.run(evidence),
            name: check.name.clone(),
            weight: check.weight,
        })
        .collect();

    // Bounded by the registry's total weight, which `build` keeps within `u32`.
    let score = checks.iter().filter(|c| c.passed).map(|c| c.weight).sum();

    ScoreReport {
        score,
        max_score: registry.max_score(),
        checks,
    }
}

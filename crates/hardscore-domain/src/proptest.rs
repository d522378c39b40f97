//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify the scoring invariants:
//! - score equals the sum of passed weights
//! - one result per check, in registration order
//! - absent evidence always fails, including silent commands and empty-capable patterns
//! - evaluation is idempotent and monotone in the set of passing checks

use crate::engine::evaluate;
use crate::model::CheckRegistry;
use crate::test_support::FakeEvidence;
use proptest::prelude::*;

/// One generated existence check: its weight and whether its file is present.
#[derive(Clone, Debug)]
struct GenCheck {
    weight: u32,
    present: bool,
}

fn arb_check() -> impl Strategy<Value = GenCheck> {
    (0u32..1_000, any::<bool>()).prop_map(|(weight, present)| GenCheck { weight, present })
}

fn arb_checks() -> impl Strategy<Value = Vec<GenCheck>> {
    prop::collection::vec(arb_check(), 0..24)
}

/// Patterns, including ones that match empty text.
fn arb_pattern() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}",
        Just(String::from("^$")),
        Just(String::from("x*")),
        Just(String::from("a|^")),
        Just(String::from(r"(?i)^status:\s*active\b|^$")),
    ]
}

fn arb_needle() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-z]{1,8}"]
}

fn path_for(i: usize) -> String {
    format!("/etc/check-{i}")
}

fn build(checks: &[GenCheck], max_score: u32) -> (CheckRegistry, FakeEvidence) {
    let mut builder = CheckRegistry::builder(max_score);
    let mut evidence = FakeEvidence::new();
    for (i, c) in checks.iter().enumerate() {
        builder = builder.file_exists(&format!("gen.{i}"), &format!("check {i}"), c.weight, path_for(i));
        if c.present {
            evidence = evidence.with_entry(&path_for(i));
        }
    }
    (builder.build().expect("generated registry is valid"), evidence)
}

proptest! {
    #[test]
    fn score_is_sum_of_passed_weights(checks in arb_checks(), max in 0u32..10_000) {
        let (registry, evidence) = build(&checks, max);
        let report = evaluate(&registry, &evidence);

        let expected: u32 = report.checks.iter().filter(|c| c.passed).map(|c| c.weight).sum();
        prop_assert_eq!(report.score, expected);
        prop_assert!(report.score <= registry.total_weight());
        prop_assert_eq!(report.max_score, max);
    }

    #[test]
    fn one_result_per_check_in_order(checks in arb_checks()) {
        let (registry, evidence) = build(&checks, 100);
        let report = evaluate(&registry, &evidence);

        prop_assert_eq!(report.checks.len(), registry.len());
        for (i, (result, generated)) in report.checks.iter().zip(&checks).enumerate() {
            prop_assert_eq!(&result.name, &format!("check {i}"));
            prop_assert_eq!(result.weight, generated.weight);
            prop_assert_eq!(result.passed, generated.present);
        }
    }

    #[test]
    fn absent_evidence_always_fails(
        checks in arb_checks(),
        pattern in arb_pattern(),
        needle in arb_needle(),
        case_insensitive in any::<bool>(),
    ) {
        let argv = ["status-tool", "status"];
        let mut builder = CheckRegistry::builder(100);
        for (i, c) in checks.iter().enumerate() {
            builder = builder
                .file_matches(&format!("text.{i}"), "text", c.weight, path_for(i), &pattern)
                .command_matches(&format!("cmd.{i}"), "cmd", c.weight, &argv, &pattern)
                .command_contains(&format!("has.{i}"), "has", c.weight, &argv, &needle, case_insensitive);
        }
        let registry = builder.build().expect("valid");

        let missing = evaluate(&registry, &FakeEvidence::new());
        let silent = evaluate(&registry, &FakeEvidence::new().with_command(&argv, ""));
        for report in [missing, silent] {
            prop_assert!(report.checks.iter().all(|c| !c.passed));
            prop_assert_eq!(report.score, 0);
        }
    }

    #[test]
    fn evaluation_is_idempotent(checks in arb_checks()) {
        let (registry, evidence) = build(&checks, 100);
        prop_assert_eq!(evaluate(&registry, &evidence), evaluate(&registry, &evidence));
    }

    #[test]
    fn passing_more_checks_never_lowers_score(checks in arb_checks(), flip in any::<prop::sample::Index>()) {
        prop_assume!(!checks.is_empty());
        let (registry, evidence) = build(&checks, 100);
        let before = evaluate(&registry, &evidence).score;

        let mut more = checks.clone();
        more[flip.index(checks.len())].present = true;
        let (registry, evidence) = build(&more, 100);
        let after = evaluate(&registry, &evidence).score;

        prop_assert!(after >= before);
    }
}

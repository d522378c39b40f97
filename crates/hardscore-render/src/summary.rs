use hardscore_types::ScoreReport;

/// One-line summary for stderr, e.g. `hardscore: 45/100 (5 of 10 checks passed)`.
pub fn render_summary(report: &ScoreReport) -> String {
    format!(
        "hardscore: {}/{} ({} of {} checks passed)",
        report.score,
        report.max_score,
        report.passed_count(),
        report.checks.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hardscore_types::CheckResult;

    #[test]
    fn summarizes_counts() {
        let report = ScoreReport {
            score: 5,
            max_score: 100,
            checks: vec![
                CheckResult {
                    passed: false,
                    name: "A".to_string(),
                    weight: 10,
                },
                CheckResult {
                    passed: true,
                    name: "B".to_string(),
                    weight: 5,
                },
            ],
        };
        assert_eq!(render_summary(&report), "hardscore: 5/100 (1 of 2 checks passed)");
    }

    #[test]
    fn summarizes_empty_report() {
        let report = ScoreReport {
            max_score: 100,
            ..ScoreReport::default()
        };
        assert_eq!(render_summary(&report), "hardscore: 0/100 (0 of 0 checks passed)");
    }
}

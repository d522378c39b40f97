use anyhow::Context;
use hardscore_types::ScoreReport;

/// Render the report as pretty JSON: `score`, `max`, `checks[{ok, msg, weight}]`.
pub fn serialize_report(report: &ScoreReport) -> anyhow::Result<String> {
    serde_json::to_string_pretty(report).context("serialize score report")
}

pub fn parse_report_json(text: &str) -> anyhow::Result<ScoreReport> {
    serde_json::from_str(text).context("parse score report json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hardscore_types::CheckResult;

    #[test]
    fn serializes_empty_report() {
        let report = ScoreReport {
            score: 0,
            max_score: 100,
            checks: Vec::new(),
        };
        let json = serialize_report(&report).expect("serialize");
        insta::assert_snapshot!(json, @r#"
        {
          "score": 0,
          "max": 100,
          "checks": []
        }
        "#);
    }

    #[test]
    fn serializes_checks_in_order_with_stable_fields() {
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
        let json = serialize_report(&report).expect("serialize");
        insta::assert_snapshot!(json, @r#"
        {
          "score": 5,
          "max": 100,
          "checks": [
            {
              "ok": false,
              "msg": "A",
              "weight": 10
            },
            {
              "ok": true,
              "msg": "B",
              "weight": 5
            }
          ]
        }
        "#);
    }

    #[test]
    fn parses_serialized_report() {
        let text = r#"{"score":10,"max":100,"checks":[{"ok":true,"msg":"UFW is active","weight":10}]}"#;
        let report = parse_report_json(text).expect("parse");
        assert_eq!(report.score, 10);
        assert_eq!(report.checks[0].name, "UFW is active");
    }

    #[test]
    fn rejects_foreign_json() {
        let err = parse_report_json(r#"{"verdict":"pass"}"#).unwrap_err();
        assert!(format!("{err:#}").contains("parse score report json"));
    }
}

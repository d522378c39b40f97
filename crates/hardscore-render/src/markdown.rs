use hardscore_types::ScoreReport;

pub fn render_markdown(report: &ScoreReport) -> String {
    let mut out = String::new();

    out.push_str("# Hardening report\n\n");
    out.push_str(&format!(
        "- Score: **{}** / {}\n- Checks: {} passed / {} total\n\n",
        report.score,
        report.max_score,
        report.passed_count(),
        report.checks.len()
    ));

    if report.checks.is_empty() {
        out.push_str("No checks were evaluated.\n");
        return out;
    }

    out.push_str("| Result | Check | Weight |\n");
    out.push_str("|---|---|---|\n");

    for c in &report.checks {
        let result = if c.passed { "PASS" } else { "FAIL" };
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            result,
            escape_cell(&c.name),
            c.weight
        ));
    }

    out
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

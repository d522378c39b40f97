//! Render use cases: markdown and terminal summary from in-memory reports.

use hardscore_types::ScoreReport;

pub fn render_markdown(report: &ScoreReport) -> String {
    hardscore_render::render_markdown(report)
}

pub fn render_summary(report: &ScoreReport) -> String {
    hardscore_render::render_summary(report)
}

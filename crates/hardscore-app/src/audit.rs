//! The `audit` use case: resolve config, build the registry, evaluate the host.

use anyhow::Context;
use hardscore_domain::CheckRegistry;
use hardscore_domain::policy::EffectiveConfig;
use hardscore_evidence::HostEvidence;
use hardscore_settings::{HardscoreConfigV1, Overrides, ResolvedConfig};
use hardscore_types::ScoreReport;

/// Input for the audit use case.
#[derive(Clone, Debug)]
pub struct AuditInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the audit use case.
#[derive(Clone, Debug)]
pub struct AuditOutput {
    pub report: ScoreReport,
}

/// Parse and resolve configuration. Empty text means defaults.
pub fn resolve(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        HardscoreConfigV1::default()
    } else {
        hardscore_settings::parse_config_toml(config_text).context("parse config")?
    };

    let resolved = hardscore_settings::resolve_config(cfg, overrides).context("resolve config")?;
    tracing::debug!(
        root = %resolved.effective.root,
        command_timeout_ms = resolved.effective.command_timeout.as_millis() as u64,
        "resolved config"
    );
    Ok(resolved)
}

/// The baseline registry with disabled checks removed.
pub fn load_registry(cfg: &EffectiveConfig) -> anyhow::Result<CheckRegistry> {
    let registry = hardscore_domain::baseline().context("build baseline registry")?;
    Ok(registry.retain_enabled(cfg))
}

/// Run one evaluation pass against the host.
pub fn run_audit(input: AuditInput<'_>) -> anyhow::Result<AuditOutput> {
    let resolved = resolve(input.config_text, input.overrides)?;
    let registry = load_registry(&resolved.effective)?;
    let evidence = HostEvidence::from_config(&resolved.effective);

    tracing::debug!(checks = registry.len(), root = %evidence.root(), "starting audit pass");
    let report = hardscore_domain::evaluate(&registry, &evidence);
    tracing::debug!(
        score = report.score,
        max = report.max_score,
        passed = report.passed_count(),
        "audit pass finished"
    );

    Ok(AuditOutput { report })
}

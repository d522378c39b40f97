use camino::Utf8PathBuf;
use std::collections::BTreeMap;
use std::time::Duration;

pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckPolicy {
    pub enabled: bool,
}

impl CheckPolicy {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }
}

/// Resolved settings for one evaluation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    /// Directory beneath which absolute check paths are resolved.
    pub root: Utf8PathBuf,
    /// Upper bound on any single evidence command.
    pub command_timeout: Duration,
    /// Per-check overrides; checks without an entry are enabled.
    pub checks: BTreeMap<String, CheckPolicy>,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            root: Utf8PathBuf::from("/"),
            command_timeout: DEFAULT_COMMAND_TIMEOUT,
            checks: BTreeMap::new(),
        }
    }
}

impl EffectiveConfig {
    pub fn is_enabled(&self, check_id: &str) -> bool {
        self.checks.get(check_id).is_none_or(|p| p.enabled)
    }
}

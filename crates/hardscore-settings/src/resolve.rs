use crate::model::HardscoreConfigV1;
use anyhow::Context;
use camino::Utf8PathBuf;
use hardscore_domain::policy::{CheckPolicy, EffectiveConfig};
use hardscore_types::{SCHEMA_CONFIG_V1, ids};
use std::time::Duration;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub root: Option<Utf8PathBuf>,
    pub command_timeout_ms: Option<u64>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: HardscoreConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let mut effective = EffectiveConfig::default();

    if let Some(root) = overrides.root.or(cfg.root.map(Utf8PathBuf::from)) {
        if root.as_str().is_empty() {
            anyhow::bail!("root must not be empty");
        }
        effective.root = root;
    }

    if let Some(ms) = overrides.command_timeout_ms.or(cfg.command_timeout_ms) {
        effective.command_timeout = parse_timeout(ms).context("invalid command_timeout_ms")?;
    }

    for (check_id, cc) in cfg.checks {
        if !ids::BASELINE_CHECK_IDS.contains(&check_id.as_str()) {
            anyhow::bail!(
                "unknown check id in [checks]: {check_id} (see `hardscore list` for available ids)"
            );
        }
        let policy = match cc.enabled {
            Some(false) => CheckPolicy::disabled(),
            _ => CheckPolicy::enabled(),
        };
        effective.checks.insert(check_id, policy);
    }

    Ok(ResolvedConfig { effective })
}

fn parse_timeout(ms: u64) -> anyhow::Result<Duration> {
    if ms == 0 {
        anyhow::bail!("command timeout must be greater than zero");
    }
    Ok(Duration::from_millis(ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;
    use hardscore_domain::policy::DEFAULT_COMMAND_TIMEOUT;

    #[test]
    fn empty_config_uses_defaults() {
        let resolved = resolve_config(HardscoreConfigV1::default(), Overrides::default())
            .expect("resolve");
        assert_eq!(resolved.effective, EffectiveConfig::default());
        assert_eq!(resolved.effective.root.as_str(), "/");
        assert_eq!(resolved.effective.command_timeout, DEFAULT_COMMAND_TIMEOUT);
    }

    #[test]
    fn file_values_apply() {
        let cfg = parse_config_toml(
            r#"
schema = "hardscore.config.v1"
root = "/mnt/image"
command_timeout_ms = 1500

[checks."ssh.protocol_2"]
enabled = false
"#,
        )
        .expect("parse");
        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        let effective = resolved.effective;

        assert_eq!(effective.root.as_str(), "/mnt/image");
        assert_eq!(effective.command_timeout, Duration::from_millis(1500));
        assert!(!effective.is_enabled(ids::CHECK_SSH_PROTOCOL_2));
        assert!(effective.is_enabled(ids::CHECK_SSH_PERMIT_ROOT_LOGIN));
    }

    #[test]
    fn overrides_win_over_file() {
        let cfg = parse_config_toml("root = \"/mnt/a\"\ncommand_timeout_ms = 100\n").expect("parse");
        let overrides = Overrides {
            root: Some(Utf8PathBuf::from("/mnt/b")),
            command_timeout_ms: Some(900),
        };
        let effective = resolve_config(cfg, overrides).expect("resolve").effective;
        assert_eq!(effective.root.as_str(), "/mnt/b");
        assert_eq!(effective.command_timeout, Duration::from_millis(900));
    }

    #[test]
    fn unknown_check_id_is_rejected() {
        let cfg = parse_config_toml("[checks.\"ssh.typo\"]\nenabled = false\n").expect("parse");
        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("ssh.typo"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let overrides = Overrides {
            command_timeout_ms: Some(0),
            ..Overrides::default()
        };
        let err = resolve_config(HardscoreConfigV1::default(), overrides).unwrap_err();
        assert!(format!("{err:#}").contains("greater than zero"));
    }

    #[test]
    fn foreign_schema_is_rejected() {
        let cfg = parse_config_toml("schema = \"hardscore.config.v2\"\n").expect("parse");
        assert!(resolve_config(cfg, Overrides::default()).is_err());
    }

    #[test]
    fn enabled_true_is_explicit_enable() {
        let cfg = parse_config_toml("[checks.\"kernel.aslr\"]\nenabled = true\n").expect("parse");
        let effective = resolve_config(cfg, Overrides::default()).expect("resolve").effective;
        assert_eq!(
            effective.checks.get(ids::CHECK_KERNEL_ASLR),
            Some(&CheckPolicy::enabled())
        );
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(parse_config_toml("root = ").is_err());
    }
}

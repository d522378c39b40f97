//! Host evidence adapters.
//!
//! This crate is allowed to do filesystem IO and to spawn the evidence commands named by
//! checks. Every failure is reported as absent evidence; nothing here returns an error.

#![forbid(unsafe_code)]

mod command;
mod fs;

use camino::{Utf8Path, Utf8PathBuf};
use hardscore_domain::Evidence;
use hardscore_domain::policy::EffectiveConfig;
use std::time::Duration;

pub use command::run_command;
pub use fs::{entry_exists, read_text};

/// Evidence read from the local host.
///
/// Absolute check paths are resolved beneath `root`, so a mounted image can be audited by
/// pointing `root` at its mount point. Commands always run against the live host.
#[derive(Clone, Debug)]
pub struct HostEvidence {
    root: Utf8PathBuf,
    command_timeout: Duration,
}

impl HostEvidence {
    pub fn new(root: impl Into<Utf8PathBuf>, command_timeout: Duration) -> Self {
        Self {
            root: root.into(),
            command_timeout,
        }
    }

    pub fn from_config(cfg: &EffectiveConfig) -> Self {
        Self::new(cfg.root.clone(), cfg.command_timeout)
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Map a check path onto the configured root.
    pub fn resolve(&self, path: &Utf8Path) -> Utf8PathBuf {
        let relative = path.strip_prefix("/").unwrap_or(path);
        self.root.join(relative)
    }
}

impl Evidence for HostEvidence {
    fn read_file(&self, path: &Utf8Path) -> Option<String> {
        read_text(&self.resolve(path))
    }

    fn file_exists(&self, path: &Utf8Path) -> bool {
        entry_exists(&self.resolve(path))
    }

    fn run_command(&self, argv: &[String]) -> String {
        run_command(argv, self.command_timeout)
    }
}

//! In-memory evidence for tests.

use crate::evidence::Evidence;
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::{BTreeMap, BTreeSet};

/// Evidence backed by maps. Anything not registered is absent.
#[derive(Clone, Debug, Default)]
pub struct FakeEvidence {
    files: BTreeMap<Utf8PathBuf, String>,
    entries: BTreeSet<Utf8PathBuf>,
    commands: BTreeMap<Vec<String>, String>,
}

impl FakeEvidence {
    pub fn new() -> Self {
        Self::default()
    }

    /// A readable text file. Also counts as an existing entry.
    pub fn with_file(mut self, path: &str, contents: &str) -> Self {
        self.files
            .insert(Utf8PathBuf::from(path), contents.to_string());
        self
    }

    /// An existing entry whose contents cannot be read.
    pub fn with_entry(mut self, path: &str) -> Self {
        self.entries.insert(Utf8PathBuf::from(path));
        self
    }

    pub fn with_command(mut self, argv: &[&str], stdout: &str) -> Self {
        self.commands.insert(
            argv.iter().map(|a| a.to_string()).collect(),
            stdout.to_string(),
        );
        self
    }
}

impl Evidence for FakeEvidence {
    fn read_file(&self, path: &Utf8Path) -> Option<String> {
        self.files.get(path).cloned()
    }

    fn file_exists(&self, path: &Utf8Path) -> bool {
        self.files.contains_key(path) || self.entries.contains(path)
    }

    fn run_command(&self, argv: &[String]) -> String {
        self.commands.get(argv).cloned().unwrap_or_default()
    }
}

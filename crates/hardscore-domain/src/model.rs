use crate::evidence::Evidence;
use crate::matchers;
use crate::policy::EffectiveConfig;
use camino::Utf8PathBuf;
use regex::Regex;
use std::fmt;

/// Evidence source and matcher a check evaluates.
#[derive(Clone, Debug)]
pub enum Probe {
    /// Pattern search over a text file's contents.
    FileMatches { path: Utf8PathBuf, pattern: Regex },
    /// Existence of a filesystem entry.
    FileExists { path: Utf8PathBuf },
    /// Pattern search over a command's standard output.
    CommandMatches { argv: Vec<String>, pattern: Regex },
    /// Substring search over a command's standard output.
    CommandContains {
        argv: Vec<String>,
        needle: String,
        case_insensitive: bool,
    },
}

impl Probe {
    /// Read the evidence and apply the matcher. Absent evidence is `false`.
    pub fn run(&self, evidence: &dyn Evidence) -> bool {
        match self {
            Probe::FileMatches { path, pattern } => {
                matchers::pattern_match(evidence.read_file(path).as_deref(), pattern)
            }
            Probe::FileExists { path } => matchers::exists(evidence.file_exists(path)),
            Probe::CommandMatches { argv, pattern } => {
                let output = command_output(evidence, argv);
                matchers::pattern_match(output.as_deref(), pattern)
            }
            Probe::CommandContains {
                argv,
                needle,
                case_insensitive,
            } => command_output(evidence, argv)
                .is_some_and(|text| matchers::substring_match(&text, needle, *case_insensitive)),
        }
    }
}

/// Command stdout as evidence. Empty output is what a failed, missing, or timed-out command
/// leaves behind, so it is absent rather than text.
fn command_output(evidence: &dyn Evidence, argv: &[String]) -> Option<String> {
    let output = evidence.run_command(argv);
    (!output.is_empty()).then_some(output)
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Probe::FileMatches { path, pattern } => {
                write!(f, "file {} matches /{}/", path, pattern.as_str())
            }
            Probe::FileExists { path } => write!(f, "file {} exists", path),
            Probe::CommandMatches { argv, pattern } => {
                write!(f, "`{}` matches /{}/", argv.join(" "), pattern.as_str())
            }
            Probe::CommandContains {
                argv,
                needle,
                case_insensitive,
            } => {
                let mode = if *case_insensitive { " (any case)" } else { "" };
                write!(f, "`{}` contains {:?}{}", argv.join(" "), needle, mode)
            }
        }
    }
}

/// A named, weighted assertion about host state. Immutable once built.
#[derive(Clone, Debug)]
pub struct Check {
    pub id: String,
    pub name: String,
    pub weight: u32,
    pub probe: Probe,
}

/// Ordered set of checks plus the fixed score ceiling.
///
/// Registration order is the report order. `max_score` is policy and is not derived from
/// the weights.
#[derive(Clone, Debug)]
pub struct CheckRegistry {
    pub(crate) checks: Vec<Check>,
    pub(crate) max_score: u32,
}

impl CheckRegistry {
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Sum of all registered weights; what a host scores when every check passes.
    pub fn total_weight(&self) -> u32 {
        self.checks.iter().map(|c| c.weight).sum()
    }

    pub fn get(&self, id: &str) -> Option<&Check> {
        self.checks.iter().find(|c| c.id == id)
    }

    /// Drop checks the policy disables. Order and `max_score` are unchanged.
    pub fn retain_enabled(mut self, cfg: &EffectiveConfig) -> Self {
        self.checks.retain(|c| cfg.is_enabled(&c.id));
        self
    }
}

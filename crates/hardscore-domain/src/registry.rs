use crate::matchers::compile_pattern;
use crate::model::{Check, CheckRegistry, Probe};
use camino::Utf8PathBuf;
use std::collections::BTreeSet;

/// A broken check definition. These are defects in the registry, never host conditions.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("check id must not be empty (check '{name}')")]
    EmptyId { name: String },

    #[error("duplicate check id: {id}")]
    DuplicateId { id: String },

    #[error("check {id}: command must not be empty")]
    EmptyCommand { id: String },

    #[error("check {id}: total weight overflows the score range")]
    WeightOverflow { id: String },

    #[error("check {id}: invalid pattern {pattern:?}")]
    InvalidPattern {
        id: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Clone, Debug)]
enum ProbeDef {
    FileMatches {
        path: Utf8PathBuf,
        pattern: String,
    },
    FileExists {
        path: Utf8PathBuf,
    },
    CommandMatches {
        argv: Vec<String>,
        pattern: String,
    },
    CommandContains {
        argv: Vec<String>,
        needle: String,
        case_insensitive: bool,
    },
}

#[derive(Clone, Debug)]
struct CheckDef {
    id: String,
    name: String,
    weight: u32,
    probe: ProbeDef,
}

/// Collects check definitions in order; [`build`](Self::build) validates all of them.
#[derive(Clone, Debug)]
pub struct CheckRegistryBuilder {
    max_score: u32,
    defs: Vec<CheckDef>,
}

impl CheckRegistry {
    pub fn builder(max_score: u32) -> CheckRegistryBuilder {
        CheckRegistryBuilder {
            max_score,
            defs: Vec::new(),
        }
    }
}

impl CheckRegistryBuilder {
    fn push(mut self, id: &str, name: &str, weight: u32, probe: ProbeDef) -> Self {
        self.defs.push(CheckDef {
            id: id.to_string(),
            name: name.to_string(),
            weight,
            probe,
        });
        self
    }

    pub fn file_matches(
        self,
        id: &str,
        name: &str,
        weight: u32,
        path: impl Into<Utf8PathBuf>,
        pattern: &str,
    ) -> Self {
        let probe = ProbeDef::FileMatches {
            path: path.into(),
            pattern: pattern.to_string(),
        };
        self.push(id, name, weight, probe)
    }

    pub fn file_exists(self, id: &str, name: &str, weight: u32, path: impl Into<Utf8PathBuf>) -> Self {
        let probe = ProbeDef::FileExists { path: path.into() };
        self.push(id, name, weight, probe)
    }

    pub fn command_matches(
        self,
        id: &str,
        name: &str,
        weight: u32,
        argv: &[&str],
        pattern: &str,
    ) -> Self {
        let probe = ProbeDef::CommandMatches {
            argv: argv.iter().map(|a| a.to_string()).collect(),
            pattern: pattern.to_string(),
        };
        self.push(id, name, weight, probe)
    }

    pub fn command_contains(
        self,
        id: &str,
        name: &str,
        weight: u32,
        argv: &[&str],
        needle: &str,
        case_insensitive: bool,
    ) -> Self {
        let probe = ProbeDef::CommandContains {
            argv: argv.iter().map(|a| a.to_string()).collect(),
            needle: needle.to_string(),
            case_insensitive,
        };
        self.push(id, name, weight, probe)
    }

    /// Validate and compile every definition. The first defect found is returned.
    ///
    /// The weights must sum within `u32`, so no score computed from this registry can overflow.
    pub fn build(self) -> Result<CheckRegistry, RegistryError> {
        let mut seen = BTreeSet::new();
        let mut checks = Vec::with_capacity(self.defs.len());
        let mut total_weight = 0u32;

        for def in self.defs {
            if def.id.trim().is_empty() {
                return Err(RegistryError::EmptyId { name: def.name });
            }
            if !seen.insert(def.id.clone()) {
                return Err(RegistryError::DuplicateId { id: def.id });
            }
            total_weight = total_weight
                .checked_add(def.weight)
                .ok_or_else(|| RegistryError::WeightOverflow { id: def.id.clone() })?;
            let probe = compile_probe(&def.id, def.probe)?;
            checks.push(Check {
                id: def.id,
                name: def.name,
                weight: def.weight,
                probe,
            });
        }

        Ok(CheckRegistry {
            checks,
            max_score: self.max_score,
        })
    }
}

fn compile_probe(id: &str, def: ProbeDef) -> Result<Probe, RegistryError> {
    let compile = |pattern: String| {
        compile_pattern(&pattern).map_err(|source| RegistryError::InvalidPattern {
            id: id.to_string(),
            pattern,
            source,
        })
    };
    let require_argv = |argv: &[String]| {
        if argv.first().is_none_or(|program| program.is_empty()) {
            Err(RegistryError::EmptyCommand { id: id.to_string() })
        } else {
            Ok(())
        }
    };

    Ok(match def {
        ProbeDef::FileMatches { path, pattern } => Probe::FileMatches {
            path,
            pattern: compile(pattern)?,
        },
        ProbeDef::FileExists { path } => Probe::FileExists { path },
        ProbeDef::CommandMatches { argv, pattern } => {
            require_argv(&argv)?;
            Probe::CommandMatches {
                argv,
                pattern: compile(pattern)?,
            }
        }
        ProbeDef::CommandContains {
            argv,
            needle,
            case_insensitive,
        } => {
            require_argv(&argv)?;
            Probe::CommandContains {
                argv,
                needle,
                case_insensitive,
            }
        }
    })
}

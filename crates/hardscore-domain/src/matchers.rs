//! Predicate matchers. Pure functions over evidence values.

use regex::{Regex, RegexBuilder};

/// Compile a check pattern with multi-line anchors and dot-matches-newline.
pub fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .multi_line(true)
        .dot_matches_new_line(true)
        .build()
}

/// True iff `pattern` matches anywhere in `text`. Absent text never matches.
pub fn pattern_match(text: Option<&str>, pattern: &Regex) -> bool {
    text.is_some_and(|t| pattern.is_match(t))
}

pub fn substring_match(text: &str, needle: &str, case_insensitive: bool) -> bool {
    if case_insensitive {
        text.to_lowercase().contains(&needle.to_lowercase())
    } else {
        text.contains(needle)
    }
}

pub fn exists(flag: bool) -> bool {
    flag
}

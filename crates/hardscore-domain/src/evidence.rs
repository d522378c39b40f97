use camino::Utf8Path;

/// Source of raw host evidence.
///
/// Implementations fail softly: a missing file, an unreadable file, or a command that cannot
/// be run is reported as absent evidence, never as an error.
pub trait Evidence {
    /// File contents as text, or `None` if the file is missing, unreadable, or not UTF-8.
    fn read_file(&self, path: &Utf8Path) -> Option<String>;

    /// Whether a filesystem entry exists at `path`.
    fn file_exists(&self, path: &Utf8Path) -> bool;

    /// Standard output of `argv`, or an empty string if the command failed to produce it.
    fn run_command(&self, argv: &[String]) -> String;
}

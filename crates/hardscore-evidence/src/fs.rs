use camino::Utf8Path;

/// Contents of a UTF-8 text file. Missing, unreadable, or undecodable files are `None`.
pub fn read_text(path: &Utf8Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(err) => {
            tracing::trace!(path = %path, error = %err, "file evidence absent");
            None
        }
    }
}

/// Whether anything exists at `path`. Symlinks are followed; a dangling link is absent.
pub fn entry_exists(path: &Utf8Path) -> bool {
    path.as_std_path().try_exists().unwrap_or(false)
}

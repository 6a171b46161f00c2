//! Loading raw input text from files or standard input.

use std::io::Read;
use std::path::Path;

use crate::error::{DupsError, Result};

/// Read a whole file, rejecting empty input.
pub fn read_file(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path)?;
    ensure_non_empty(text, &path.display().to_string())
}

/// Read `path`, or all of standard input when `path` is `None`.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => read_file(p),
        None => {
            let mut text = String::new();
            std::io::stdin().lock().read_to_string(&mut text)?;
            ensure_non_empty(text, "stdin")
        }
    }
}

fn ensure_non_empty(text: String, source_name: &str) -> Result<String> {
    if text.trim().is_empty() {
        return Err(DupsError::EmptyInput { source_name: source_name.to_string() });
    }
    tracing::debug!(source = source_name, bytes = text.len(), "read input");
    Ok(text)
}

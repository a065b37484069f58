//! Suggestions - Static Item-Name Suggestion Resource
//!
//! A newline-delimited plain-text file fetched once when the calculator page
//! loads. Loading is fire-and-forget: a missing or unreadable file only logs
//! a warning and the page runs without suggestions.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Read the suggestion list, discarding blank lines and surrounding whitespace
pub fn load_suggestions(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Load the suggestion list, swallowing failures.
///
/// The rest of the page neither blocks on nor degrades with the resource.
pub fn load_or_empty(path: &Path) -> Vec<String> {
    match load_suggestions(path) {
        Ok(suggestions) => {
            tracing::debug!(count = suggestions.len(), path = %path.display(), "suggestions loaded");
            suggestions
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "failed to load suggestions");
            Vec::new()
        }
    }
}

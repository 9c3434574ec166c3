//! Agent name normalization and validation.
//!
//! Agent names double as file stems (`<name>.md`), so they are normalized to a
//! lowercase hyphenated form and checked before any path is built from them.

use crate::error::{Result, ScaffoldError};
use regex::Regex;
use std::sync::LazyLock;

/// Runs of whitespace, underscores and hyphens collapse to one hyphen.
static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("Invalid separator regex"));

/// Normalize a user-supplied agent name.
///
/// Leading and trailing separators are dropped; non-ASCII letters are kept.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_name("My Agent_Name"), "my-agent-name");
/// ```
pub fn normalize_name(raw: &str) -> String {
    SEPARATOR_REGEX
        .replace_all(raw, "-")
        .trim_matches('-')
        .to_lowercase()
}

/// Check that a normalized name is non-empty and safe to use as a file stem.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ScaffoldError::UserError(
            "agent name is required".to_string(),
        ));
    }

    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(ScaffoldError::UserError(format!(
            "agent name '{}' is not safe: contains path traversal characters",
            name
        )));
    }

    Ok(())
}

//! Request templates shared by every engine operation.

use crate::error::{ValidationError, VaultResult};
use reqwest::{Method, StatusCode};
use std::fmt;

/// Placeholder substituted with the resource name in a path template.
const NAME_PLACEHOLDER: &str = "{name}";

/// One (resource, verb) request template.
#[derive(Debug, Clone)]
pub struct Operation {
    /// HTTP method
    pub method: Method,
    /// Path relative to the base URL; may contain `{name}`
    pub path: &'static str,
    /// The single status accepted as success
    pub expected: StatusCode,
}

impl Operation {
    /// Create a request template.
    #[must_use]
    pub const fn new(method: Method, path: &'static str, expected: StatusCode) -> Self {
        Self {
            method,
            path,
            expected,
        }
    }

    /// Whether the path addresses a named resource.
    #[must_use]
    pub fn is_named(&self) -> bool {
        self.path.contains(NAME_PLACEHOLDER)
    }

    /// Build the full URL: `base + "/" + path`, with `{name}` substituted.
    ///
    /// Surrounding slashes are stripped from `base` and `name` so the result
    /// never holds a double slash or a trailing segment.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingName`] if the path is named and
    /// `name` is absent or empty, and [`ValidationError::InvalidName`] if
    /// `name` is not a single literal path segment.
    pub fn url(&self, base: &str, name: Option<&str>) -> VaultResult<String> {
        let base = base.trim_end_matches('/');
        if !self.is_named() {
            return Ok(format!("{base}/{}", self.path));
        }

        let name = name
            .map(|n| n.trim_matches('/'))
            .filter(|n| !n.is_empty())
            .ok_or(ValidationError::MissingName)?;
        check_segment(name)?;
        Ok(format!("{base}/{}", self.path.replace(NAME_PLACEHOLDER, name)))
    }
}

/// Rejects names the URL parser would not keep as one literal segment:
/// separators, query and fragment markers, percent escapes and dot segments.
fn check_segment(name: &str) -> Result<(), ValidationError> {
    let breaks_path = |c: char| matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_control();
    if name == "." || name == ".." || name.contains(breaks_path) {
        return Err(ValidationError::InvalidName);
    }
    Ok(())
}

/// Fixed result of a write, delete or rotate operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus {
    /// Resource created or credentials issued
    Created,
    /// Resource deleted
    Deleted,
    /// Root credentials rotated
    Rotated,
    /// Engine setting configured
    Configured,
}

impl OperationStatus {
    /// Status string reported to callers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Deleted => "deleted",
            Self::Rotated => "rotated",
            Self::Configured => "configured",
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

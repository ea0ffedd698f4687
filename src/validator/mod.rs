// JSON validation core - parse outcomes, locations and error context

use std::path::Path;

use serde::de::IgnoredAny;
use thiserror::Error;

/// A structural parse failure with its 1-based source location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at line {line}, column {column}")]
pub struct SyntaxError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

/// Result of validating a single file.
///
/// Every failure mode is absorbed into a variant here; validation never
/// propagates an error across a file boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The file parsed as a well-formed JSON document
    Valid,
    /// The file does not exist (reported as a skip, never fatal)
    Missing,
    /// The file exists but is not well-formed JSON
    Syntax(SyntaxError),
    /// The file could not be read (I/O error, invalid encoding)
    Unreadable { message: String },
}

impl Outcome {
    /// Whether this outcome counts toward the failing exit code.
    /// Missing files are skips, not errors.
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Syntax(_) | Outcome::Unreadable { .. })
    }
}

/// Validation result together with the source text, kept around so the
/// caller can render a context window without re-reading the file.
#[derive(Debug, Clone)]
pub struct Validation {
    pub outcome: Outcome,
    /// Present whenever the file was actually read
    pub source: Option<String>,
}

/// Validate a string as a JSON document.
///
/// The document content is irrelevant, only well-formedness matters, so the
/// deserialization target is `IgnoredAny`.
pub fn validate_str(content: &str) -> Result<(), SyntaxError> {
    match serde_json::from_str::<IgnoredAny>(content) {
        Ok(_) => Ok(()),
        Err(e) => Err(SyntaxError {
            message: bare_message(&e),
            line: e.line(),
            column: e.column(),
        }),
    }
}

// serde_json appends " at line N column M" to its messages; the location is
// carried separately in SyntaxError, so strip the suffix.
fn bare_message(err: &serde_json::Error) -> String {
    let full = err.to_string();
    match full.rfind(" at line ") {
        Some(idx) => full[..idx].to_string(),
        None => full,
    }
}

/// Validate a single file on disk.
pub fn validate_file(path: &Path) -> Validation {
    if !path.exists() {
        return Validation {
            outcome: Outcome::Missing,
            source: None,
        };
    }

    match std::fs::read_to_string(path) {
        Ok(content) => {
            let outcome = match validate_str(&content) {
                Ok(()) => Outcome::Valid,
                Err(e) => Outcome::Syntax(e),
            };
            Validation {
                outcome,
                source: Some(content),
            }
        }
        Err(e) => Validation {
            outcome: Outcome::Unreadable {
                message: e.to_string(),
            },
            source: None,
        },
    }
}

/// One line of a context window around an error location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextLine {
    /// 1-based line number
    pub number: usize,
    pub text: String,
    /// True for the failing line itself
    pub marked: bool,
}

/// Extract the source lines surrounding `line` (1-based), clamped to the
/// file boundaries. Returns an empty window for an out-of-range line.
pub fn context_window(
    content: &str,
    line: usize,
    before: usize,
    after: usize,
) -> Vec<ContextLine> {
    let lines: Vec<&str> = content.lines().collect();
    if line == 0 || line > lines.len() {
        return Vec::new();
    }

    // Convert to 0-based indices for slicing
    let start = (line - 1).saturating_sub(before);
    let end = (line + after).min(lines.len());

    (start..end)
        .map(|i| ContextLine {
            number: i + 1,
            text: lines[i].to_string(),
            marked: i + 1 == line,
        })
        .collect()
}

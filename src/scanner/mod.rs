// Trailing-delimiter scanner - textual heuristic, not a syntax-aware check

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

// Separator, optionally followed by whitespace (including newlines), then a
// closing brace or bracket. Known imprecision: the pattern also matches
// inside string literals, and a comment between the separator and the
// delimiter hides a real offender. Both are accepted properties of the
// heuristic; this is a lint, not a parser.
static TRAILING_DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*[}\]]").expect("trailing delimiter pattern compiles"));

/// One trailing-delimiter match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// 1-based line on which the match starts (the separator's line)
    pub line: usize,
    /// The matched text, whitespace included
    pub text: String,
}

/// Result of scanning a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The file does not exist (reported as a skip, never fatal)
    Missing,
    /// The file could not be read
    Unreadable { message: String },
    /// Scan completed; the list may be empty
    Findings(Vec<Finding>),
}

/// Scan a string for trailing delimiters, in a single pass.
pub fn scan_str(content: &str) -> Vec<Finding> {
    TRAILING_DELIMITER
        .find_iter(content)
        .map(|m| Finding {
            line: content[..m.start()].matches('\n').count() + 1,
            text: m.as_str().to_string(),
        })
        .collect()
}

/// Scan a single file on disk.
pub fn scan_file(path: &Path) -> ScanOutcome {
    if !path.exists() {
        return ScanOutcome::Missing;
    }

    match std::fs::read_to_string(path) {
        Ok(content) => ScanOutcome::Findings(scan_str(&content)),
        Err(e) => ScanOutcome::Unreadable {
            message: e.to_string(),
        },
    }
}

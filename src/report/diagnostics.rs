use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub file: String,
    pub range: DiagnosticRange,
    pub severity: DiagnosticSeverity,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticRange {
    pub start: Position,
    pub end: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Info,
}

/// JSON report for the `check` command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub diagnostics: Vec<Diagnostic>,
    pub summary: CheckSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckSummary {
    pub total_files: usize,
    pub files_with_errors: usize,
    pub files_skipped: usize,
    pub total_errors: usize,
    pub total_warnings: usize,
}

/// JSON report for the `scan` command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub findings: Vec<Diagnostic>,
    pub summary: ScanSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSummary {
    pub total_files: usize,
    pub files_with_findings: usize,
    pub files_skipped: usize,
    pub total_findings: usize,
}

impl Diagnostic {
    pub fn error(file: &str, code: &str, message: &str, line: usize) -> Self {
        Self {
            file: file.to_string(),
            range: DiagnosticRange {
                start: Position { line, column: 1 },
                end: Position { line, column: 1000 },
            },
            severity: DiagnosticSeverity::Error,
            code: code.to_string(),
            message: message.to_string(),
            hint: None,
        }
    }

    pub fn warning(file: &str, code: &str, message: &str, line: usize) -> Self {
        Self {
            file: file.to_string(),
            range: DiagnosticRange {
                start: Position { line, column: 1 },
                end: Position { line, column: 1000 },
            },
            severity: DiagnosticSeverity::Warning,
            code: code.to_string(),
            message: message.to_string(),
            hint: None,
        }
    }

    pub fn info(file: &str, code: &str, message: &str, line: usize) -> Self {
        Self {
            file: file.to_string(),
            range: DiagnosticRange {
                start: Position { line, column: 1 },
                end: Position { line, column: 1000 },
            },
            severity: DiagnosticSeverity::Info,
            code: code.to_string(),
            message: message.to_string(),
            hint: None,
        }
    }

    /// Narrow the range to a precise start column (parse errors carry one)
    pub fn at_column(mut self, column: usize) -> Self {
        self.range.start.column = column;
        self
    }

    pub fn with_hint(mut self, hint: &str) -> Self {
        self.hint = Some(hint.to_string());
        self
    }
}

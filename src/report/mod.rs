// Report module - diagnostic records and JSON output envelopes

pub mod diagnostics;

pub use diagnostics::{
    CheckReport, CheckSummary, Diagnostic, DiagnosticRange, DiagnosticSeverity, Position,
    ScanReport, ScanSummary,
};

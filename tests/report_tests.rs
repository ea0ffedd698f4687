// Report tests - diagnostic records and JSON envelopes

use jsonvet::report::{
    CheckReport, CheckSummary, Diagnostic, DiagnosticSeverity, ScanReport, ScanSummary,
};

#[test]
fn test_diagnostic_error_defaults() {
    let d = Diagnostic::error("bad.json", "json_parse_error", "expected value", 7);

    assert_eq!(d.file, "bad.json");
    assert_eq!(d.severity, DiagnosticSeverity::Error);
    assert_eq!(d.code, "json_parse_error");
    assert_eq!(d.range.start.line, 7);
    assert_eq!(d.range.start.column, 1);
    assert!(d.hint.is_none());
}

#[test]
fn test_diagnostic_at_column() {
    let d = Diagnostic::error("bad.json", "json_parse_error", "expected value", 7).at_column(12);

    assert_eq!(d.range.start.line, 7);
    assert_eq!(d.range.start.column, 12);
}

#[test]
fn test_diagnostic_with_hint() {
    let d = Diagnostic::warning("data.js", "trailing_delimiter", "Trailing delimiter ',}'", 3)
        .with_hint("Remove the separator before the closing delimiter");

    assert_eq!(d.severity, DiagnosticSeverity::Warning);
    assert!(d.hint.is_some());
}

#[test]
fn test_diagnostic_serialization_skips_empty_hint() {
    let d = Diagnostic::info("a.json", "file_not_found", "File not found", 1);
    let json = serde_json::to_value(&d).unwrap();

    assert!(json.get("hint").is_none());
    assert_eq!(json["code"], "file_not_found");
    assert_eq!(json["range"]["start"]["line"], 1);
}

#[test]
fn test_check_report_shape() {
    let report = CheckReport {
        diagnostics: vec![Diagnostic::error(
            "bad.json",
            "json_parse_error",
            "expected `,` or `}`",
            2,
        )],
        summary: CheckSummary {
            total_files: 3,
            files_with_errors: 1,
            files_skipped: 1,
            total_errors: 1,
            total_warnings: 1,
        },
    };

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["summary"]["total_files"], 3);
    assert_eq!(json["summary"]["files_with_errors"], 1);
    assert_eq!(json["diagnostics"].as_array().unwrap().len(), 1);

    let parsed: CheckReport = serde_json::from_value(json).unwrap();
    assert_eq!(parsed.summary.files_skipped, 1);
}

#[test]
fn test_scan_report_shape() {
    let report = ScanReport {
        findings: vec![
            Diagnostic::warning("data.js", "trailing_delimiter", "Trailing delimiter ',}'", 1),
            Diagnostic::warning("gone.js", "file_not_found", "File not found", 1),
        ],
        summary: ScanSummary {
            total_files: 2,
            files_with_findings: 1,
            files_skipped: 1,
            total_findings: 1,
        },
    };

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["summary"]["total_findings"], 1);
    assert_eq!(json["findings"].as_array().unwrap().len(), 2);
}

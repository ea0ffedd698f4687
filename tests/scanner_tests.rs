// Scanner tests - trailing-delimiter heuristic

use jsonvet::scanner::{Finding, ScanOutcome, scan_file, scan_str};
use std::path::Path;

#[test]
fn test_clean_input_reports_none() {
    let content = r#"
{
  "a": 1,
  "b": [1, 2, 3],
  "c": {"nested": true}
}
"#;

    assert!(scan_str(content).is_empty());
}

#[test]
fn test_single_trailing_comma_in_object() {
    let findings = scan_str("{\"a\": 1,}");

    assert_eq!(
        findings,
        vec![Finding {
            line: 1,
            text: ",}".to_string(),
        }]
    );
}

#[test]
fn test_trailing_comma_in_array() {
    let findings = scan_str("[1, 2, 3,]");

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].text, ",]");
}

#[test]
fn test_match_spanning_line_break() {
    // Separator at the end of line 2, closing bracket on line 3;
    // the finding belongs to the separator's line
    let content = "[\n  1,\n]";

    let findings = scan_str(content);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, 2);
    assert_eq!(findings[0].text, ",\n]");
}

#[test]
fn test_intervening_whitespace() {
    let findings = scan_str("{\"a\": 1,   }");

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].text, ",   }");
}

#[test]
fn test_multiple_findings_in_order() {
    let content = "{\"a\": [1,],\n \"b\": 2,}";

    let findings = scan_str(content);
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].line, 1);
    assert_eq!(findings[0].text, ",]");
    assert_eq!(findings[1].line, 2);
    assert_eq!(findings[1].text, ",}");
}

#[test]
fn test_string_literal_false_positive_is_kept() {
    // The heuristic is textual by design; a match inside a string
    // literal is still reported
    let findings = scan_str("{\"msg\": \"a,} b\"}");

    assert_eq!(findings.len(), 1);
}

#[test]
fn test_separator_without_closing_delimiter() {
    assert!(scan_str("{\"a\": 1,\n \"b\": 2}").is_empty());
}

#[test]
fn test_scan_missing_file() {
    let outcome = scan_file(Path::new("definitely-not-here.json"));
    assert_eq!(outcome, ScanOutcome::Missing);
}

#[test]
fn test_scan_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.js");
    std::fs::write(&path, "var data = [1, 2,];").unwrap();

    match scan_file(&path) {
        ScanOutcome::Findings(findings) => {
            assert_eq!(findings.len(), 1);
            assert_eq!(findings[0].line, 1);
        }
        other => panic!("Expected findings, got {:?}", other),
    }
}

#[test]
fn test_scan_unreadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.js");
    std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

    match scan_file(&path) {
        ScanOutcome::Unreadable { message } => assert!(!message.is_empty()),
        other => panic!("Expected unreadable outcome, got {:?}", other),
    }
}

// Scan command - flag trailing delimiters before closing braces/brackets

use anyhow::Result;
use console::style;
use tracing::{debug, info};

use crate::cli::args::ScanArgs;
use crate::report::{Diagnostic, ScanReport, ScanSummary};
use crate::scanner::{self, ScanOutcome};
use crate::utils::FileUtils;

pub async fn handle_scan(args: &ScanArgs) -> Result<()> {
    let files = FileUtils::resolve_paths(&args.files);
    if files.is_empty() {
        anyhow::bail!(
            "no input files (pass paths on the command line or set general.files in .jsonvetrc.toml)"
        );
    }

    let mut findings: Vec<Diagnostic> = Vec::new();
    let mut files_with_findings = 0;
    let mut files_skipped = 0;

    info!("Scanning {} file(s)...", files.len());

    for file in &files {
        let file_str = file.to_string_lossy().to_string();
        debug!("Scanning {}", file_str);

        match scanner::scan_file(file) {
            ScanOutcome::Missing => {
                if !args.is_json() {
                    println!(
                        "{} ... {}",
                        file.display(),
                        style("SKIP (not found)").yellow()
                    );
                }
                findings.push(Diagnostic::warning(
                    &file_str,
                    "file_not_found",
                    "File not found",
                    1,
                ));
                files_skipped += 1;
            }
            ScanOutcome::Unreadable { message } => {
                if !args.is_json() {
                    println!(
                        "{} ... {}: {}",
                        file.display(),
                        style("FAILED").red(),
                        message
                    );
                }
                findings.push(Diagnostic::warning(&file_str, "io_error", &message, 1));
                files_skipped += 1;
            }
            ScanOutcome::Findings(matches) => {
                if matches.is_empty() {
                    if !args.is_json() {
                        println!("{} ... none found", file.display());
                    }
                    continue;
                }

                for m in &matches {
                    if !args.is_json() {
                        // Matched text can span lines; escape it for display
                        println!(
                            "{}:{}: [{}] trailing delimiter '{}'",
                            file.display(),
                            m.line,
                            style("trailing_delimiter").yellow(),
                            m.text.escape_debug()
                        );
                    }
                    findings.push(
                        Diagnostic::warning(
                            &file_str,
                            "trailing_delimiter",
                            &format!("Trailing delimiter '{}'", m.text.escape_debug()),
                            m.line,
                        )
                        .with_hint("Remove the separator before the closing delimiter"),
                    );
                }
                files_with_findings += 1;
            }
        }
    }

    if args.is_json() {
        let total_findings = findings
            .iter()
            .filter(|d| d.code == "trailing_delimiter")
            .count();
        let report = ScanReport {
            findings,
            summary: ScanSummary {
                total_files: files.len(),
                files_with_findings,
                files_skipped,
                total_findings,
            },
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    // Findings are heuristic warnings, never a failing exit
    Ok(())
}

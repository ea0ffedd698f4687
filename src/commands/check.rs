// Check command - validate JSON data files

use anyhow::Result;
use console::style;
use tracing::{debug, info};

use crate::cli::args::CheckArgs;
use crate::report::{CheckReport, CheckSummary, Diagnostic, DiagnosticSeverity};
use crate::utils::FileUtils;
use crate::validator::{self, Outcome};

pub async fn handle_check(args: &CheckArgs) -> Result<()> {
    let files = FileUtils::resolve_paths(&args.files);
    if files.is_empty() {
        anyhow::bail!(
            "no input files (pass paths on the command line or set general.files in .jsonvetrc.toml)"
        );
    }

    let context = args.context_lines();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let mut files_with_errors = 0;
    let mut files_skipped = 0;

    info!("Checking {} file(s)...", files.len());

    for file in &files {
        let file_str = file.to_string_lossy().to_string();
        debug!("Validating {}", file_str);

        let validation = validator::validate_file(file);
        match &validation.outcome {
            Outcome::Valid => {
                if !args.is_json() {
                    println!("{} ... {}", file.display(), style("OK").green());
                }
            }
            Outcome::Missing => {
                if !args.is_json() {
                    println!(
                        "{} ... {}",
                        file.display(),
                        style("SKIP (not found)").yellow()
                    );
                }
                diagnostics.push(Diagnostic::warning(
                    &file_str,
                    "file_not_found",
                    "File not found",
                    1,
                ));
                files_skipped += 1;
            }
            Outcome::Syntax(err) => {
                if !args.is_json() {
                    println!(
                        "{}:{}:{}: [{}] {}",
                        file.display(),
                        err.line,
                        err.column,
                        style("json_parse_error").red(),
                        err.message
                    );
                    if context > 0 {
                        if let Some(source) = &validation.source {
                            print_context(source, err.line, context);
                        }
                    }
                }
                diagnostics.push(
                    Diagnostic::error(&file_str, "json_parse_error", &err.message, err.line)
                        .at_column(err.column),
                );
                files_with_errors += 1;
            }
            Outcome::Unreadable { message } => {
                if !args.is_json() {
                    println!("{} ... {}: {}", file.display(), style("FAILED").red(), message);
                }
                diagnostics.push(Diagnostic::error(&file_str, "io_error", message, 1));
                files_with_errors += 1;
            }
        }
    }

    if args.is_json() {
        let total_errors = diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Error))
            .count();
        let total_warnings = diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Warning))
            .count();
        let report = CheckReport {
            diagnostics,
            summary: CheckSummary {
                total_files: files.len(),
                files_with_errors,
                files_skipped,
                total_errors,
                total_warnings,
            },
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if files_with_errors > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Print the source lines around the failing line, failing line marked
fn print_context(source: &str, line: usize, window: usize) {
    for ctx in validator::context_window(source, line, window, window) {
        if ctx.marked {
            println!("{} {}", style(">>>").red().bold(), ctx.text);
        } else {
            println!("{:3}: {}", ctx.number, ctx.text);
        }
    }
}

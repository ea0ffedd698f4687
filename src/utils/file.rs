// Cross-platform file utilities

use std::path::{Path, PathBuf};

/// Extensions treated as JSON data files when expanding directories.
/// The quiz data this tool grew up on keeps JSON payloads in .js files too.
const DATA_EXTENSIONS: &[&str] = &["json", "js"];

/// File utilities for cross-platform operations
pub struct FileUtils;

impl FileUtils {
    /// Check if a path carries a data-file extension
    pub fn is_data_file(path: &Path) -> bool {
        path.extension()
            .is_some_and(|e| DATA_EXTENSIONS.iter().any(|d| e == *d))
    }

    /// Collect all data files from a directory, hidden entries excluded
    pub fn collect_data_files(path: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();

        if path.is_file() {
            if Self::is_data_file(path) {
                files.push(path.to_path_buf());
            }
        } else if path.is_dir() {
            let walker = walkdir::WalkDir::new(path).into_iter().filter_entry(|e| {
                // Always include the root directory itself, even if it starts with '.'
                if e.depth() == 0 {
                    return true;
                }
                !e.file_name().to_string_lossy().starts_with('.')
            });

            for entry in walker.flatten() {
                if entry.file_type().is_file() && Self::is_data_file(entry.path()) {
                    files.push(entry.path().to_path_buf());
                }
            }

            // Walk order is filesystem-dependent; sort for deterministic output
            files.sort();
        }

        files
    }

    /// Expand a mixed list of files and directories into a flat file list.
    ///
    /// Explicit files are kept in argument order, missing ones included, so
    /// the caller can report them as skips. Directories are expanded in
    /// place to their sorted data files.
    pub fn resolve_paths(paths: &[PathBuf]) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for path in paths {
            if path.is_dir() {
                files.extend(Self::collect_data_files(path));
            } else {
                files.push(path.clone());
            }
        }

        files
    }
}

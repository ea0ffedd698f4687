// CLI argument definitions using Clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// JSON data-file checking utility
#[derive(Parser, Debug)]
#[command(name = "jsonvet")]
#[command(author = "jsonvet team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate JSON data files and flag trailing delimiters", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // Flatten CheckArgs to support an implicit check command at top-level.
    // This allows `jsonvet data.json` to work as expected.
    #[command(flatten)]
    pub check_args: CheckArgs,

    /// Enable verbose debug output
    #[arg(short = 'v', long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(short = 'c', long, global = true, default_value_t = false)]
    pub no_color: bool,

    /// Show current configuration and exit
    #[arg(long, default_value_t = false)]
    pub config: bool,

    /// Create default configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    pub init_config: Option<PathBuf>,

    /// Install shell completion (bash, zsh, fish, elvish, powershell)
    #[arg(long, value_name = "SHELL_TYPE", value_parser = ["bash", "zsh", "fish", "elvish", "powershell"])]
    pub completion: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate files as JSON documents (default)
    Check(CheckArgs),

    /// Scan files for trailing delimiters before closing braces/brackets
    Scan(ScanArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Files or directories to validate
    // Optional so the config file list can supply the set when omitted
    #[arg(required = false)]
    pub files: Vec<PathBuf>,

    /// Context lines printed around a parse error (0 disables the window)
    #[arg(long, value_name = "N")]
    pub context: Option<usize>,

    /// Output format (text, json)
    #[arg(long)]
    pub format: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Files or directories to scan
    #[arg(required = false)]
    pub files: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(long)]
    pub format: Option<String>,
}

impl Cli {
    /// Helper to get effective CheckArgs (explicit subcommand or implicit)
    pub fn get_check_args(&self) -> &CheckArgs {
        match &self.command {
            Some(Commands::Check(args)) => args,
            _ => &self.check_args,
        }
    }
}

fn is_json_format(value: &str) -> bool {
    value.eq_ignore_ascii_case("json")
}

impl CheckArgs {
    pub fn is_json(&self) -> bool {
        is_json_format(self.format.as_deref().unwrap_or("text"))
    }

    /// Window size with the config/built-in default applied
    pub fn context_lines(&self) -> usize {
        self.context.unwrap_or_else(crate::config::default_context)
    }
}

impl ScanArgs {
    pub fn is_json(&self) -> bool {
        is_json_format(self.format.as_deref().unwrap_or("text"))
    }
}

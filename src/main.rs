// Main entry point for jsonvet

use anyhow::Result;
use clap::Parser;
use tracing::info;

use jsonvet::cli::{CheckArgs, Cli, Commands, ScanArgs};
use jsonvet::commands;
use jsonvet::config;

use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from file (if exists)
    let config = config::Config::load();

    let cli = Cli::parse();

    // Setup tracing
    let filter = if cli.verbose {
        "jsonvet=debug,warn"
    } else {
        "jsonvet=warn,error"
    };

    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .event_format(jsonvet::logging::CustomFormatter)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    let color_enabled = !cli.no_color && config.as_ref().map_or(true, |c| c.output.color);
    if !color_enabled {
        console::set_colors_enabled(false);
    }

    if cli.verbose {
        info!("Starting jsonvet v{}", env!("CARGO_PKG_VERSION"));
    }

    // Handle config flag
    if cli.config {
        println!("Current configuration:");
        println!("\n  Command-line arguments:");
        let args = cli.get_check_args();
        println!("    Context lines: {}", args.context_lines());
        println!(
            "    Output format: {}",
            args.format.as_deref().unwrap_or("text")
        );

        if let Some(cfg) = &config {
            println!("\n  Configuration file loaded:");
            if !cfg.general.files.is_empty() {
                println!("    Files: {}", cfg.general.files.join(", "));
            }
            println!("    Context lines: {}", cfg.general.context);
            println!(
                "    Color: {}",
                if cfg.output.color {
                    "enabled"
                } else {
                    "disabled"
                }
            );
            println!("    Output format: {}", cfg.output.format);
        } else {
            println!("\n  No configuration file loaded");
            println!("  Create one with: jsonvet --init-config .jsonvetrc.toml");
        }

        println!("\nConfiguration precedence:");
        println!("  1. Command-line arguments (highest)");
        println!("  2. Configuration file");
        println!("  3. Built-in defaults (lowest)");

        return Ok(());
    }

    // Handle init_config flag
    if let Some(config_file) = cli.init_config {
        let config = config::Config::default();
        let toml_content = config.to_toml();
        std::fs::write(&config_file, toml_content)?;
        println!("Configuration file created: {}", config_file.display());
        println!("\nYou can now edit the file to customize your settings.");
        return Ok(());
    }

    // Handle completion flag
    if let Some(shell) = cli.completion {
        return commands::handle_completion(&shell);
    }

    match &cli.command {
        Some(Commands::Scan(args)) => {
            let args = scan_args_with_config(args, config.as_ref());
            commands::handle_scan(&args).await
        }
        Some(Commands::Check(args)) => {
            let args = check_args_with_config(args, config.as_ref());
            commands::handle_check(&args).await
        }
        // Implicit check: `jsonvet data.json`
        None => {
            let args = check_args_with_config(&cli.check_args, config.as_ref());
            commands::handle_check(&args).await
        }
    }
}

/// Apply configuration file defaults to check arguments.
/// CLI values always win; the config file list only fills an empty one.
fn check_args_with_config(args: &CheckArgs, config: Option<&config::Config>) -> CheckArgs {
    let mut args = args.clone();
    if let Some(cfg) = config {
        if args.files.is_empty() {
            args.files = cfg.general.files.iter().map(PathBuf::from).collect();
        }
        if args.context.is_none() {
            args.context = Some(cfg.general.context);
        }
        if args.format.is_none() {
            args.format = Some(cfg.output.format.clone());
        }
    }
    args
}

fn scan_args_with_config(args: &ScanArgs, config: Option<&config::Config>) -> ScanArgs {
    let mut args = args.clone();
    if let Some(cfg) = config {
        if args.files.is_empty() {
            args.files = cfg.general.files.iter().map(PathBuf::from).collect();
        }
        if args.format.is_none() {
            args.format = Some(cfg.output.format.clone());
        }
    }
    args
}

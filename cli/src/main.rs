//! # dirkit Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the dirkit CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handler
//!
//! ## Architecture
//!
//! - Each top-level command (`scaffold`, `tree`) is a variant of the `Commands` enum
//! - Commands are mapped to handler functions in their respective modules
//! - All errors are propagated to this level, printed once, and turned into exit status 1
//!
//! Logs go to stderr so that stdout carries only the command output.
//!
//! ## Examples
//!
//! ```bash
//! # Create the project skeleton in the current directory
//! dirkit scaffold
//!
//! # Show the tree two levels deep with debug logging
//! dirkit -vv tree --max-depth 2
//! ```
//!
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (scaffold, tree)
mod common; // Shared utilities (fs, ui)
mod core; // Core infrastructure (config, error)

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "dirkit",
    about = "📂 dirkit: project skeleton scaffolding and annotated directory trees",
    long_about = "Create a fixed project skeleton in the current directory, or print\n\
                  a directory tree with file sizes, depth limiting and ignore markers.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// All available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the project skeleton in the current directory.
    #[command(alias = "s")]
    Scaffold(commands::scaffold::ScaffoldArgs),
    /// Print an annotated directory tree.
    #[command(alias = "t")]
    Tree(commands::tree::TreeArgs),
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn main() {
    let cli = Cli::parse();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(cli.verbose)));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Scaffold(args) => commands::scaffold::handle_scaffold(args),
        Commands::Tree(args) => commands::tree::handle_tree(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

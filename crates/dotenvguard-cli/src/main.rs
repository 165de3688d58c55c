//! dotenvguard CLI
//!
//! Validates a `.env` file against the variables declared in `.env.example`.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use dotenvguard_core::ValidateOptions;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::CheckArgs;
use error::Result;

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Returns whether the invoked command succeeded.
fn run() -> Result<bool> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("{}: failed to set tracing subscriber", "warning".yellow().bold());
        }
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            // No command provided - show help hint
            println!(
                "{} Validate .env files against .env.example",
                "dotenvguard".green().bold()
            );
            println!();
            println!("Run {} for available commands.", "dotenvguard --help".cyan());
            Ok(true)
        }
    }
}

fn execute_command(cmd: Commands) -> Result<bool> {
    match cmd {
        Commands::Check {
            directory,
            env_file,
            example_file,
            show_extra,
            no_empty_warning,
            check_env,
            json,
        } => commands::run_check(&CheckArgs {
            directory,
            env_file,
            example_file,
            options: ValidateOptions {
                warn_empty: !no_empty_warning,
                show_extra,
                check_env,
            },
            json,
        }),
    }
}

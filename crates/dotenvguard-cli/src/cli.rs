//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// dotenvguard - Validate .env files against .env.example
#[derive(Parser, Debug)]
#[command(name = "dotenvguard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Validate .env against .env.example in a directory
    ///
    /// Exits with status 1 when a required variable is missing or empty.
    ///
    /// Examples:
    ///   dotenvguard check                   # Check the current directory
    ///   dotenvguard check deploy/           # Check another directory
    ///   dotenvguard check --extra --json    # Include extras, JSON output
    ///   dotenvguard check --check-env       # Accept values from the environment
    Check {
        /// Directory containing .env and .env.example
        #[arg(default_value = ".")]
        directory: PathBuf,

        /// Path to .env file
        #[arg(short, long = "env", env = "DOTENVGUARD_ENV_FILE")]
        env_file: Option<PathBuf>,

        /// Path to .env.example file
        #[arg(short = 'x', long = "example", env = "DOTENVGUARD_EXAMPLE_FILE")]
        example_file: Option<PathBuf>,

        /// Show extra variables not in .env.example
        #[arg(long = "extra")]
        show_extra: bool,

        /// Don't warn about empty values
        #[arg(long)]
        no_empty_warning: bool,

        /// Fall back to process environment variables for missing names
        #[arg(long)]
        check_env: bool,

        /// Output results as JSON
        #[arg(short, long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_defaults() {
        let cli = Cli::try_parse_from(["dotenvguard", "check"]).unwrap();
        match cli.command {
            Some(Commands::Check {
                directory,
                show_extra,
                no_empty_warning,
                check_env,
                json,
                ..
            }) => {
                assert_eq!(directory, PathBuf::from("."));
                assert!(!show_extra);
                assert!(!no_empty_warning);
                assert!(!check_env);
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_check_all_flags() {
        let cli = Cli::try_parse_from([
            "dotenvguard",
            "-v",
            "check",
            "app",
            "-e",
            "custom.env",
            "-x",
            "custom.example",
            "--extra",
            "--no-empty-warning",
            "--check-env",
            "--json",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(
            cli.command,
            Some(Commands::Check {
                directory: PathBuf::from("app"),
                env_file: Some(PathBuf::from("custom.env")),
                example_file: Some(PathBuf::from("custom.example")),
                show_extra: true,
                no_empty_warning: true,
                check_env: true,
                json: true,
            })
        );
    }

    #[test]
    fn test_no_command() {
        let cli = Cli::try_parse_from(["dotenvguard"]).unwrap();
        assert!(cli.command.is_none());
    }
}

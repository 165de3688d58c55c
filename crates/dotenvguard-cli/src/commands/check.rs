//! Check command implementation
//!
//! Resolves the actual and template files, runs validation, and renders the
//! result as a table or as JSON.

use std::path::PathBuf;

use colored::{ColoredString, Colorize};
use dotenvguard_core::{
    Status, ValidateOptions, ValidationResult, find_env_files, validate_with_process_env,
};

use crate::error::{CliError, Result};

/// Arguments for the check command
#[derive(Debug, Clone)]
pub struct CheckArgs {
    pub directory: PathBuf,
    pub env_file: Option<PathBuf>,
    pub example_file: Option<PathBuf>,
    pub options: ValidateOptions,
    pub json: bool,
}

/// Run the check command
///
/// Returns whether validation passed. Failing to locate either file is an
/// error rather than a failed validation.
pub fn run_check(args: &CheckArgs) -> Result<bool> {
    let (env_file, example_file) = resolve_files(args)?;

    tracing::debug!(
        env_file = %env_file.display(),
        example_file = %example_file.display(),
        options = ?args.options,
        "Running check"
    );

    let result = validate_with_process_env(&env_file, &example_file, &args.options)?;

    if args.json {
        println!("{}", result.to_json()?);
    } else {
        println!();
        print!("{}", render_table(&result));
        println!();
        println!("{}", render_summary(&result));
    }

    Ok(result.ok())
}

/// Apply explicit paths, discovering whichever was not given.
fn resolve_files(args: &CheckArgs) -> Result<(PathBuf, PathBuf)> {
    if !args.directory.is_dir() {
        return Err(CliError::user(format!(
            "Directory '{}' does not exist or is not a directory.",
            args.directory.display()
        )));
    }

    let (mut env_file, mut example_file) = (args.env_file.clone(), args.example_file.clone());
    if env_file.is_none() || example_file.is_none() {
        let found = find_env_files(&args.directory);
        env_file = env_file.or(found.env_file);
        example_file = example_file.or(found.example_file);
    }

    let example_file = example_file.ok_or_else(|| {
        CliError::user(
            "No .env.example file found. Provide one with --example or create .env.example in the directory.",
        )
    })?;
    let env_file = env_file.ok_or_else(|| {
        CliError::user(
            "No .env file found. Provide one with --env or create .env in the directory.",
        )
    })?;

    Ok((env_file, example_file))
}

fn status_label(status: Status) -> &'static str {
    match status {
        Status::Ok => "ok",
        Status::Missing => "MISSING",
        Status::Empty => "empty",
        Status::Extra => "extra",
        Status::Optional => "optional",
        Status::FromEnvironment => "env",
    }
}

fn style_status(status: Status, padded: &str) -> ColoredString {
    match status {
        Status::Ok => padded.green(),
        Status::Missing => padded.red().bold(),
        Status::Empty => padded.yellow(),
        Status::Extra => padded.dimmed(),
        Status::Optional => padded.blue(),
        Status::FromEnvironment => padded.cyan(),
    }
}

/// Render the Variable / Status / Default table.
pub fn render_table(result: &ValidationResult) -> String {
    const HEADERS: [&str; 3] = ["Variable", "Status", "Default"];

    let name_width = result
        .variables
        .iter()
        .map(|v| v.name.chars().count())
        .chain([HEADERS[0].len()])
        .max()
        .unwrap_or_default();
    let status_width = result
        .variables
        .iter()
        .map(|v| status_label(v.status).len())
        .chain([HEADERS[1].len()])
        .max()
        .unwrap_or_default();

    let mut out = String::new();
    out.push_str(&format!("{}\n", "dotenvguard".bold()));
    out.push_str(&format!(
        "{}  {}  {}\n",
        format!("{:<name_width$}", HEADERS[0]).bold(),
        format!("{:<status_width$}", HEADERS[1]).bold(),
        HEADERS[2].bold()
    ));

    for var in &result.variables {
        let name = format!("{:<name_width$}", var.name).cyan();
        let label = format!("{:<status_width$}", status_label(var.status));
        let status = style_status(var.status, &label);
        let default = var.default_value.as_deref().unwrap_or_default().dimmed();
        out.push_str(&format!("{}  {}  {}\n", name, status, default));
    }

    out
}

/// One-line outcome summary.
pub fn render_summary(result: &ValidationResult) -> String {
    let total = result.variables.len();
    let missing = result.missing().len();
    let empty = result.empty().len();

    if missing > 0 {
        format!(
            "{} variable{} out of {} required",
            format!("{} missing", missing).red().bold(),
            plural(missing),
            total
        )
    } else if empty > 0 {
        format!(
            "{} variable{} (set but blank) out of {}",
            format!("{} empty", empty).yellow(),
            plural(empty),
            total
        )
    } else {
        format!("All {} variables present.", total).green().to_string()
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

//! Parsing and validation engine for dotenvguard.
//!
//! Checks a runtime `.env` file against the contract declared by a template
//! such as `.env.example`: every declared variable must be present and,
//! optionally, non-empty.
//!
//! # Pipeline
//!
//! ```text
//! file text -> EnvFile (parser) -> ValidationResult (validate) -> ValidationReport (report)
//! ```
//!
//! Template lines may carry an inline `# optional` annotation, in which case a
//! missing variable is reported as optional instead of missing. Unmet names can
//! also be resolved from the process environment when requested.
//!
//! # Example
//!
//! ```
//! use dotenvguard_core::{Status, ValidateOptions, compare, parse_str};
//!
//! let template = parse_str("DB_URL=\nDEBUG=true  # optional\n", true);
//! let actual = parse_str("DB_URL=postgres://localhost\n", false);
//!
//! let vars = compare(&template, &actual, &ValidateOptions::default(), |_| None);
//! assert_eq!(vars[0].status, Status::Ok);
//! assert_eq!(vars[1].status, Status::Optional);
//! ```

pub mod discovery;
pub mod error;
pub mod parser;
pub mod report;
pub mod validate;

pub use discovery::{DiscoveredFiles, ENV_FILE_NAME, TEMPLATE_CANDIDATES, find_env_files};
pub use error::{Error, Result};
pub use parser::{EnvFile, ParsedEntry, parse_env_file, parse_example_file, parse_file, parse_str};
pub use report::{ValidationReport, VariableReport};
pub use validate::{
    ENVIRONMENT_SOURCE, EvaluatedVariable, Status, ValidateOptions, ValidationResult, compare,
    validate, validate_with_process_env,
};

//! Template-versus-actual comparison.
//!
//! Every name declared by the template is classified into exactly one
//! [`Status`]. Names found only in the actual file can be appended as
//! [`Status::Extra`] rows.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;
use crate::parser::{EnvFile, parse_env_file, parse_example_file};
use crate::report::ValidationReport;

/// Provenance tag recorded for variables resolved from the process environment.
pub const ENVIRONMENT_SOURCE: &str = "environment";

/// Outcome for a single variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Present in the actual file
    Ok,
    /// Required by the template but absent
    Missing,
    /// Present but blank while empty values are being flagged
    Empty,
    /// Present in the actual file only
    Extra,
    /// Absent, but the template marks it `# optional`
    Optional,
    /// Absent from the file, found in the process environment
    #[serde(rename = "env")]
    FromEnvironment,
}

impl Status {
    /// Wire name used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Missing => "missing",
            Self::Empty => "empty",
            Self::Extra => "extra",
            Self::Optional => "optional",
            Self::FromEnvironment => "env",
        }
    }

    /// Whether this status makes the overall result fail.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Missing | Self::Empty)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of a [`ValidationResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatedVariable {
    pub name: String,
    pub status: Status,
    /// The template declares a non-empty value for this name
    pub has_default: bool,
    /// The template's value; `Some` exactly when `has_default` is true
    pub default_value: Option<String>,
    pub optional: bool,
    /// Provenance tag, set only for [`Status::FromEnvironment`]
    pub source: Option<String>,
}

impl EvaluatedVariable {
    fn extra(name: &str) -> Self {
        Self {
            name: name.to_string(),
            status: Status::Extra,
            has_default: false,
            default_value: None,
            optional: false,
            source: None,
        }
    }
}

/// Switches controlling classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Report `KEY=` in the actual file as [`Status::Empty`]
    pub warn_empty: bool,
    /// Append [`Status::Extra`] rows for names missing from the template
    pub show_extra: bool,
    /// Resolve absent names through the environment lookup
    pub check_env: bool,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            warn_empty: true,
            show_extra: false,
            check_env: false,
        }
    }
}

/// Aggregate outcome of validating one actual file against one template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// Template names in template order, then extras in actual-file order
    pub variables: Vec<EvaluatedVariable>,
    pub env_path: String,
    pub example_path: String,
}

impl ValidationResult {
    /// True when no variable is missing or empty.
    pub fn ok(&self) -> bool {
        !self.variables.iter().any(|v| v.status.is_failure())
    }

    pub fn missing(&self) -> Vec<&EvaluatedVariable> {
        self.with_status(Status::Missing)
    }

    pub fn empty(&self) -> Vec<&EvaluatedVariable> {
        self.with_status(Status::Empty)
    }

    pub fn extra(&self) -> Vec<&EvaluatedVariable> {
        self.with_status(Status::Extra)
    }

    /// Variables with the given status, in result order.
    pub fn with_status(&self, status: Status) -> Vec<&EvaluatedVariable> {
        self.variables
            .iter()
            .filter(|v| v.status == status)
            .collect()
    }

    /// Serializable view of this result.
    pub fn to_report(&self) -> ValidationReport {
        ValidationReport::from(self)
    }

    /// Pretty-printed JSON report.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_report())?)
    }
}

/// Classify every template name against the actual file.
///
/// # Arguments
/// * `template` - Parsed template, with annotation detection enabled
/// * `actual` - Parsed actual file
/// * `options` - Classification switches
/// * `lookup` - Environment lookup, consulted only when `options.check_env`
///   is set and the name is absent from `actual`
///
/// # Example
/// ```
/// use dotenvguard_core::{Status, ValidateOptions, compare, parse_str};
///
/// let template = parse_str("API_KEY=\n", true);
/// let actual = parse_str("", false);
/// let options = ValidateOptions { check_env: true, ..Default::default() };
///
/// let vars = compare(&template, &actual, &options, |name| {
///     (name == "API_KEY").then(|| "from-env".to_string())
/// });
/// assert_eq!(vars[0].status, Status::FromEnvironment);
/// assert_eq!(vars[0].source.as_deref(), Some("environment"));
/// ```
pub fn compare<F>(
    template: &EnvFile,
    actual: &EnvFile,
    options: &ValidateOptions,
    lookup: F,
) -> Vec<EvaluatedVariable>
where
    F: Fn(&str) -> Option<String>,
{
    let mut variables = Vec::with_capacity(template.len());

    for entry in template {
        let has_default = entry.has_value();
        let default_value = if has_default { entry.value.clone() } else { None };
        let mut source = None;

        let status = match actual.get(&entry.name) {
            None if options.check_env && lookup(&entry.name).is_some() => {
                source = Some(ENVIRONMENT_SOURCE.to_string());
                Status::FromEnvironment
            }
            None if entry.optional => Status::Optional,
            None => Status::Missing,
            Some(found) if found.is_empty_value() && options.warn_empty => Status::Empty,
            Some(_) => Status::Ok,
        };

        debug!(name = %entry.name, %status, "Classified variable");

        variables.push(EvaluatedVariable {
            name: entry.name.clone(),
            status,
            has_default,
            default_value,
            optional: entry.optional,
            source,
        });
    }

    if options.show_extra {
        variables.extend(
            actual
                .names()
                .filter(|name| !template.contains(name))
                .map(EvaluatedVariable::extra),
        );
    }

    variables
}

/// Validate the actual file at `env_path` against the template at `example_path`.
///
/// Either file may be missing; a missing file parses as empty, so a missing
/// actual file reports every required template name as missing.
pub fn validate<F>(
    env_path: impl AsRef<Path>,
    example_path: impl AsRef<Path>,
    options: &ValidateOptions,
    lookup: F,
) -> Result<ValidationResult>
where
    F: Fn(&str) -> Option<String>,
{
    let env_path = env_path.as_ref();
    let example_path = example_path.as_ref();

    let template = parse_example_file(example_path)?;
    let actual = parse_env_file(env_path)?;

    let variables = compare(&template, &actual, options, lookup);

    let result = ValidationResult {
        variables,
        env_path: env_path.display().to_string(),
        example_path: example_path.display().to_string(),
    };

    debug!(
        ok = result.ok(),
        total = result.variables.len(),
        "Validation finished"
    );

    Ok(result)
}

/// [`validate`] using the current process environment as the lookup.
///
/// A variable set to a non-UTF-8 value still counts as set.
pub fn validate_with_process_env(
    env_path: impl AsRef<Path>,
    example_path: impl AsRef<Path>,
    options: &ValidateOptions,
) -> Result<ValidationResult> {
    validate(env_path, example_path, options, |name| {
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    })
}

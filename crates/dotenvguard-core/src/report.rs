//! JSON report shape for validation results

use serde::{Deserialize, Serialize};

use crate::validate::{Status, ValidationResult};

/// Machine-readable summary of a [`ValidationResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub ok: bool,
    pub env_file: String,
    pub example_file: String,
    pub missing: Vec<String>,
    pub empty: Vec<String>,
    pub extra: Vec<String>,
    pub variables: Vec<VariableReport>,
}

/// One entry of [`ValidationReport::variables`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableReport {
    pub name: String,
    pub status: Status,
    pub has_default: bool,
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl From<&ValidationResult> for ValidationReport {
    fn from(result: &ValidationResult) -> Self {
        let names = |status: Status| -> Vec<String> {
            result
                .with_status(status)
                .into_iter()
                .map(|v| v.name.clone())
                .collect()
        };

        Self {
            ok: result.ok(),
            env_file: result.env_path.clone(),
            example_file: result.example_path.clone(),
            missing: names(Status::Missing),
            empty: names(Status::Empty),
            extra: names(Status::Extra),
            variables: result
                .variables
                .iter()
                .map(|v| VariableReport {
                    name: v.name.clone(),
                    status: v.status,
                    has_default: v.has_default,
                    optional: v.optional,
                    source: v.source.clone(),
                })
                .collect(),
        }
    }
}

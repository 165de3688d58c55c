//! Locating the actual and template files in a directory.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Default name of the actual configuration file.
pub const ENV_FILE_NAME: &str = ".env";

/// Template file names, in order of preference.
pub const TEMPLATE_CANDIDATES: &[&str] = &[
    ".env.example",
    ".env.sample",
    ".env.template",
    "env.example",
];

/// Files found by [`find_env_files`]. Each is `None` when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredFiles {
    pub env_file: Option<PathBuf>,
    pub example_file: Option<PathBuf>,
}

/// Find `.env` and the first existing template candidate in `dir`.
pub fn find_env_files(dir: impl AsRef<Path>) -> DiscoveredFiles {
    let dir = dir.as_ref();

    let env_file = Some(dir.join(ENV_FILE_NAME)).filter(|p| p.exists());
    let example_file = TEMPLATE_CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.exists());

    debug!(
        dir = %dir.display(),
        env_file = ?env_file,
        example_file = ?example_file,
        "Discovered files"
    );

    DiscoveredFiles {
        env_file,
        example_file,
    }
}

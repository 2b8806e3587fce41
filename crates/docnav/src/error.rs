//! CLI error types.

use std::path::PathBuf;

use docnav_config::ConfigError;
use docnav_site::{RegistryError, Severity, SiteError, SpecLoadError};
use docnav_storage::StorageError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("Cannot read navigation file {}: {source}", .path.display())]
    Navigation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Spec(#[from] SpecLoadError),

    #[error("{} page(s) could not be registered", .0.len())]
    Registry(Vec<RegistryError>),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("{0}")]
    Output(String),
}

impl CliError {
    /// Every individual problem behind this error, one line each.
    ///
    /// Empty when the top-level message already says everything.
    pub(crate) fn diagnostics(&self) -> Vec<(Severity, String)> {
        match self {
            Self::Registry(errors) => errors
                .iter()
                .map(|e| (Severity::Error, e.to_string()))
                .collect(),
            Self::Site(SiteError::Invalid(report)) => report
                .errors
                .iter()
                .map(|e| (Severity::Error, e.to_string()))
                .chain(report.warnings.iter().map(|w| (Severity::Warning, w.to_string())))
                .collect(),
            _ => Vec::new(),
        }
    }
}

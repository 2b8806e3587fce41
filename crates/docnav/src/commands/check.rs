//! `docnav check` command implementation.

use clap::Args;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub site: SiteArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or validation finds blocking problems.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let loaded = self.site.load(&output)?;

        let pages = loaded.site.registry().len();
        if loaded.warnings.is_empty() {
            output.success(&format!("Navigation OK: {pages} page(s) linked"));
        } else {
            output.success(&format!(
                "Navigation OK: {pages} page(s), {} warning(s)",
                loaded.warnings.len()
            ));
        }
        Ok(())
    }
}

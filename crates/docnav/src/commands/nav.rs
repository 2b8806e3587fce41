//! `docnav nav` command implementation.

use clap::Args;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
}

impl NavArgs {
    /// Execute the nav command: print the validated sidebar as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if loading or validation fails, or stdout cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let loaded = self.site.load(&output)?;

        let navigation = loaded.site.navigation();
        let json = if self.pretty {
            serde_json::to_string_pretty(&navigation)
        } else {
            serde_json::to_string(&navigation)
        }
        .map_err(|e| CliError::Output(e.to_string()))?;

        output
            .data(&json)
            .map_err(|e| CliError::Output(e.to_string()))?;
        Ok(())
    }
}

//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod nav;

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};
use docnav_site::OrphanPolicy;
use docnav_storage::FsStorage;

pub(crate) use check::CheckArgs;
pub(crate) use nav::NavArgs;

use crate::error::CliError;
use crate::output::Output;
use crate::pipeline::{self, Loaded};

/// Options shared by every command that loads the site.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Navigation YAML file (overrides config).
    #[arg(short, long)]
    navigation: Option<PathBuf>,

    /// Treat orphan pages as errors.
    #[arg(long)]
    deny_orphans: bool,

    /// Allow orphan pages even if the config denies them.
    #[arg(long, conflicts_with = "deny_orphans")]
    allow_orphans: bool,

    /// Enable verbose output (show per-phase logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl SiteArgs {
    /// Resolve `deny_orphans` from --deny-orphans/--allow-orphans flags.
    fn resolve_deny_orphans(&self) -> Option<bool> {
        if self.deny_orphans {
            Some(true)
        } else if self.allow_orphans {
            Some(false)
        } else {
            None
        }
    }

    /// Load config, scan content and validate the navigation.
    pub(crate) fn load(&self, output: &Output) -> Result<Loaded, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            navigation: self.navigation.clone(),
            deny_orphans: self.resolve_deny_orphans(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }
        output.info(&format!(
            "Source directory: {}",
            config.docs_resolved.source_dir.display()
        ));
        output.info(&format!(
            "Navigation: {}",
            config.docs_resolved.navigation.display()
        ));

        let policy = if config.validation.deny_orphans {
            OrphanPolicy::Deny
        } else {
            OrphanPolicy::Warn
        };
        let storage = FsStorage::new(config.docs_resolved.source_dir.clone());

        let loaded = pipeline::load_from_paths(&storage, &config.docs_resolved.navigation, policy)?;
        for warning in &loaded.warnings {
            output.diagnostic(warning.severity_with(policy), &warning.to_string());
        }
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        site: SiteArgs,
    }

    #[test]
    fn test_orphan_flags_default_to_config() {
        let cli = TestCli::parse_from(["docnav"]);

        assert_eq!(cli.site.resolve_deny_orphans(), None);
    }

    #[test]
    fn test_deny_orphans_flag() {
        let cli = TestCli::parse_from(["docnav", "--deny-orphans"]);

        assert_eq!(cli.site.resolve_deny_orphans(), Some(true));
    }

    #[test]
    fn test_allow_orphans_flag() {
        let cli = TestCli::parse_from(["docnav", "--allow-orphans"]);

        assert_eq!(cli.site.resolve_deny_orphans(), Some(false));
    }

    #[test]
    fn test_orphan_flags_conflict() {
        let result = TestCli::try_parse_from(["docnav", "--deny-orphans", "--allow-orphans"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_path_overrides() {
        let cli = TestCli::parse_from(["docnav", "-s", "content", "-n", "sidebar.yaml", "-v"]);

        assert_eq!(cli.site.source_dir, Some(PathBuf::from("content")));
        assert_eq!(cli.site.navigation, Some(PathBuf::from("sidebar.yaml")));
        assert!(cli.site.verbose);
    }
}

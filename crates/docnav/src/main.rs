//! docnav CLI - Documentation navigation checker.
//!
//! Provides commands for:
//! - `check`: Validate the sidebar against the content pages
//! - `nav`: Print the validated sidebar as JSON

mod commands;
mod error;
mod output;
mod pipeline;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, NavArgs};
use output::Output;

/// docnav - Documentation navigation checker.
#[derive(Parser)]
#[command(name = "docnav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the navigation for duplicate, dangling and orphan pages.
    Check(CheckArgs),
    /// Print the validated navigation as JSON.
    Nav(NavArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Check(args) => args.site.verbose,
        Commands::Nav(args) => args.site.verbose,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Nav(args) => args.execute(),
    };

    if let Err(err) = result {
        for (severity, line) in err.diagnostics() {
            output.diagnostic(severity, &line);
        }
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

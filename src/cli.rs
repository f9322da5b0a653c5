//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `loadhooks`.
#[derive(Debug, Parser)]
#[command(name = "loadhooks", version, about = "Run load-test processor hooks locally")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the exported hooks.
    List,
    /// Run a hook for a number of simulated requests and print each context.
    Run {
        /// Exported hook name (e.g. `uuid`).
        hook: String,
        /// Number of simulated requests.
        #[arg(short, long, default_value_t = 1)]
        count: u32,
        /// Variable to seed every request context with, as KEY=VALUE.
        #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_var)]
        vars: Vec<(String, String)>,
        /// Serve identifiers from a recorded cassette instead of the live source.
        #[arg(long, value_name = "PATH")]
        replay: Option<PathBuf>,
    },
}

fn parse_var(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got `{raw}`")),
    }
}

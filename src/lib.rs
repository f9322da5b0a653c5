//! Load-test processor hooks.
//!
//! A hook runs once per simulated request, mutates that request's
//! [`RequestContext`](request::RequestContext) and hands control back to the
//! host engine. The only hook shipped is `uuid`, which seeds a fresh random
//! identifier for later templated requests to reference.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod hooks;
pub mod ports;
pub mod request;

pub use error::HookError;
pub use hooks::{Hook, HookRegistry};
pub use request::{RequestContext, RequestParams};

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}

//! Command dispatch and handlers.

pub mod list;
pub mod run;

use std::env;
use std::path::PathBuf;

use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// For `run`, `--replay` serves identifiers from a cassette; otherwise, when
/// `LOADHOOKS_RECORD` is set to a file path, every generated identifier is
/// recorded to a cassette at that path. Other commands always use the live
/// context and never write a cassette.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails. A failed
/// cassette write is reported only when the command itself succeeded; when
/// both fail, the command's error is returned and the write failure logged.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let ctx = match command {
        Command::Run { replay: Some(path), .. } => ServiceContext::replaying(path)?,
        Command::Run { replay: None, .. } => match env::var_os("LOADHOOKS_RECORD") {
            Some(path) => ServiceContext::recording(&PathBuf::from(path)),
            None => ServiceContext::live(),
        },
        Command::List => ServiceContext::live(),
    };

    let result = dispatch_with_context(command, &ctx);

    // Write the cassette even when the command failed.
    settle(result, ctx.finish())
}

/// Combine a command result with the outcome of saving its cassette.
fn settle(result: Result<(), String>, saved: Result<(), String>) -> Result<(), String> {
    match (result, saved) {
        (Err(err), Err(save_err)) => {
            tracing::warn!(err = %save_err, "failed to write cassette");
            Err(err)
        }
        (Err(err), Ok(())) | (Ok(()), Err(err)) => Err(err),
        (Ok(()), Ok(())) => Ok(()),
    }
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::List => list::run(ctx),
        Command::Run { hook, count, vars, .. } => run::run(ctx, hook, *count, vars),
    }
}

//! `loadhooks run` command.

use std::io::Write;

use serde_json::Value;

use crate::adapters::live::TracingEventEmitter;
use crate::context::ServiceContext;
use crate::hooks::HookRegistry;
use crate::request::RequestContext;

/// Run `hook` for `count` simulated requests.
///
/// Each request gets a fresh context seeded from `vars`. Once the hook
/// hands control back, the context variables are printed as one JSON
/// object per line.
///
/// # Errors
///
/// Returns an error string if the hook is unknown, the hook fails, or
/// stdout cannot be written.
pub fn run(
    ctx: &ServiceContext,
    hook: &str,
    count: u32,
    vars: &[(String, String)],
) -> Result<(), String> {
    let registry = HookRegistry::with_defaults(ctx.id_gen.clone());
    let events = TracingEventEmitter;
    let mut stdout = std::io::stdout().lock();

    tracing::info!(hook, count, "running simulated requests");
    for request in 0..count {
        let mut request_ctx = RequestContext::from_vars(vars.iter().cloned());
        let mut printed = Ok(());
        registry
            .invoke(hook, &Value::Null, &mut request_ctx, &events, |done| {
                printed = print_vars(&mut stdout, done);
            })
            .map_err(|e| format!("request {request}: {e}"))?;
        printed.map_err(|e| format!("Failed to write output: {e}"))?;
    }
    Ok(())
}

fn print_vars(out: &mut impl Write, ctx: &RequestContext) -> std::io::Result<()> {
    serde_json::to_writer(&mut *out, ctx.vars())?;
    writeln!(out)
}

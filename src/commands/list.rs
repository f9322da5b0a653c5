//! `loadhooks list` command.

use crate::context::ServiceContext;
use crate::hooks::HookRegistry;

/// Print every exported hook name, one per line.
///
/// # Errors
///
/// Infallible today; returns `Result` to match the other handlers.
pub fn run(ctx: &ServiceContext) -> Result<(), String> {
    let registry = HookRegistry::with_defaults(ctx.id_gen.clone());
    for name in registry.names() {
        println!("{name}");
    }
    Ok(())
}

//! Errors surfaced by hooks and the hook registry.

use thiserror::Error;

/// Faults a hook invocation can propagate to its host.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HookError {
    /// The request context does not accept assignments.
    #[error("request context is frozen; cannot assign variable `{key}`")]
    ContextFrozen {
        /// Variable the hook tried to assign.
        key: String,
    },
    /// No hook is exported under the requested name.
    #[error("no hook exported under the name `{0}`")]
    UnknownHook(String),
    /// The identifier source could not produce an identifier.
    #[error("identifier source failed: {0}")]
    IdSource(String),
}

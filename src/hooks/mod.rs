//! Hooks and the registry exporting them to a host engine.
//!
//! A [`Hook`] reports completion as a plain `Result`. Hosts that drive
//! steps through continuations go through [`HookRegistry::invoke`], which
//! runs the continuation only after the hook succeeded.

pub mod uuid;

pub use self::uuid::UuidHook;

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::HookError;
use crate::ports::{EventEmitter, IdGenerator};
use crate::request::{RequestContext, RequestParams};

/// A step the host engine runs once per simulated request.
pub trait Hook: Send + Sync {
    /// Runs the hook against one request's context.
    ///
    /// # Errors
    ///
    /// Returns an error if the hook could not apply its effect; the host
    /// should treat the simulated request as failed.
    fn call(
        &self,
        params: &RequestParams,
        ctx: &mut RequestContext,
        events: &dyn EventEmitter,
    ) -> Result<(), HookError>;
}

/// Export surface: hook name to hook.
#[derive(Default)]
pub struct HookRegistry {
    hooks: BTreeMap<String, Box<dyn Hook>>,
}

impl HookRegistry {
    /// Creates a registry with no hooks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry exporting the built-in hooks (`uuid`).
    #[must_use]
    pub fn with_defaults(id_gen: Arc<dyn IdGenerator>) -> Self {
        let mut registry = Self::new();
        registry.register(UuidHook::NAME, UuidHook::new(id_gen));
        registry
    }

    /// Exports `hook` under `name`, replacing any hook already there.
    pub fn register(&mut self, name: impl Into<String>, hook: impl Hook + 'static) {
        self.hooks.insert(name.into(), Box::new(hook));
    }

    /// Exported names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.hooks.keys().map(String::as_str)
    }

    /// Looks up an exported hook.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Hook> {
        self.hooks.get(name).map(Box::as_ref)
    }

    /// Runs the hook named `name`, then `next` with the updated context.
    ///
    /// `next` runs exactly once when the hook succeeds and never when it
    /// fails.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::UnknownHook`] if nothing is exported under
    /// `name`, or whatever error the hook itself propagates.
    pub fn invoke<F>(
        &self,
        name: &str,
        params: &RequestParams,
        ctx: &mut RequestContext,
        events: &dyn EventEmitter,
        next: F,
    ) -> Result<(), HookError>
    where
        F: FnOnce(&RequestContext),
    {
        let hook = self.get(name).ok_or_else(|| HookError::UnknownHook(name.to_string()))?;
        hook.call(params, ctx, events)?;
        next(ctx);
        Ok(())
    }
}

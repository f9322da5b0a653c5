//! Per-request state handed to hooks by the host engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::HookError;

/// Opaque request parameters supplied by the host. Hooks may ignore them.
pub type RequestParams = Value;

/// Variables scoped to one simulated request.
///
/// Later templated requests read these by name. The host creates a fresh
/// context per simulated request and drops it when the request completes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestContext {
    vars: BTreeMap<String, Value>,
    #[serde(skip)]
    frozen: bool,
}

impl RequestContext {
    /// Creates an empty, writable context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writable context seeded with the given variables.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            vars: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            frozen: false,
        }
    }

    /// Returns this context with assignments disabled.
    #[must_use]
    pub fn frozen(mut self) -> Self {
        self.frozen = true;
        self
    }

    /// Whether assignments are rejected.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Assigns `value` to `key`, returning the previous value if any.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::ContextFrozen`] if the context is frozen; the
    /// context is left untouched in that case.
    pub fn set_var(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, HookError> {
        let key = key.into();
        if self.frozen {
            return Err(HookError::ContextFrozen { key });
        }
        Ok(self.vars.insert(key, value.into()))
    }

    /// Looks up a variable.
    #[must_use]
    pub fn var(&self, key: &str) -> Option<&Value> {
        self.vars.get(key)
    }

    /// All variables, ordered by name.
    #[must_use]
    pub fn vars(&self) -> &BTreeMap<String, Value> {
        &self.vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_var_inserts_and_overwrites() {
        let mut ctx = RequestContext::new();
        assert_eq!(ctx.set_var("user", "a").unwrap(), None);
        assert_eq!(ctx.set_var("user", "b").unwrap(), Some(json!("a")));
        assert_eq!(ctx.var("user"), Some(&json!("b")));
    }

    #[test]
    fn frozen_context_rejects_assignment() {
        let mut ctx = RequestContext::from_vars([("user", "a")]).frozen();
        let err = ctx.set_var("user", "b").unwrap_err();

        assert_eq!(err, HookError::ContextFrozen { key: "user".into() });
        assert_eq!(ctx.var("user"), Some(&json!("a")));
    }

    #[test]
    fn serializes_only_vars() {
        let ctx = RequestContext::from_vars([("n", json!(1))]).frozen();
        let encoded = serde_json::to_value(&ctx).unwrap();
        assert_eq!(encoded, json!({"vars": {"n": 1}}));
    }
}

//! The `uuid` hook: seeds each simulated request with a fresh identifier.

use std::sync::Arc;

use super::Hook;
use crate::error::HookError;
use crate::ports::{EventEmitter, IdGenerator};
use crate::request::{RequestContext, RequestParams};

/// Writes a newly generated identifier to the `uuid` request variable.
///
/// Request parameters and the event emitter are ignored. Every other
/// variable in the context is left as it was.
pub struct UuidHook {
    id_gen: Arc<dyn IdGenerator>,
}

impl UuidHook {
    /// Name the hook is exported under, and the variable it writes.
    pub const NAME: &'static str = "uuid";

    /// Creates the hook over an identifier source.
    #[must_use]
    pub fn new(id_gen: Arc<dyn IdGenerator>) -> Self {
        Self { id_gen }
    }
}

impl Hook for UuidHook {
    fn call(
        &self,
        _params: &RequestParams,
        ctx: &mut RequestContext,
        _events: &dyn EventEmitter,
    ) -> Result<(), HookError> {
        let id = self.id_gen.generate_id()?;
        tracing::debug!(hook = Self::NAME, %id, "injecting identifier");
        ctx.set_var(Self::NAME, id)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::LiveIdGenerator;
    use crate::hooks::HookRegistry;
    use crate::ports::NoopEventEmitter;
    use serde_json::{json, Value};
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Hands out `fixed-0`, `fixed-1`, ...
    #[derive(Default)]
    struct SequentialIds(Mutex<u32>);

    impl IdGenerator for SequentialIds {
        fn generate_id(&self) -> Result<String, HookError> {
            let mut next = self.0.lock().unwrap();
            *next += 1;
            Ok(format!("fixed-{}", *next - 1))
        }
    }

    struct DrainedIds;

    impl IdGenerator for DrainedIds {
        fn generate_id(&self) -> Result<String, HookError> {
            Err(HookError::IdSource("no ids left".into()))
        }
    }

    fn live_registry() -> HookRegistry {
        HookRegistry::with_defaults(Arc::new(LiveIdGenerator::new()))
    }

    fn uuid_of(ctx: &RequestContext) -> &str {
        ctx.var("uuid").and_then(Value::as_str).expect("uuid var should be a string")
    }

    /// Matches `^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$`.
    fn is_v4_text(id: &str) -> bool {
        let groups: Vec<&str> = id.split('-').collect();
        let lens: Vec<usize> = groups.iter().map(|g| g.len()).collect();
        lens == [8, 4, 4, 4, 12]
            && groups.iter().all(|g| g.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')))
            && groups[2].starts_with('4')
            && groups[3].starts_with(['8', '9', 'a', 'b'])
    }

    #[test]
    fn empty_context_gets_uuid_and_continuation_runs() {
        let registry = live_registry();
        let mut ctx = RequestContext::new();
        let mut done = false;

        registry.invoke("uuid", &Value::Null, &mut ctx, &NoopEventEmitter, |_| done = true).unwrap();

        assert!(done);
        assert!(is_v4_text(uuid_of(&ctx)), "not a v4 uuid: {}", uuid_of(&ctx));
    }

    #[test]
    fn written_values_are_valid_v4_uuids() {
        let hook = UuidHook::new(Arc::new(LiveIdGenerator::new()));
        for _ in 0..100 {
            let mut ctx = RequestContext::new();
            hook.call(&Value::Null, &mut ctx, &NoopEventEmitter).unwrap();
            assert!(is_v4_text(uuid_of(&ctx)));
        }
    }

    #[test]
    fn thousand_invocations_yield_distinct_ids() {
        let hook = UuidHook::new(Arc::new(LiveIdGenerator::new()));
        let ids: HashSet<String> = (0..1000)
            .map(|_| {
                let mut ctx = RequestContext::new();
                hook.call(&Value::Null, &mut ctx, &NoopEventEmitter).unwrap();
                uuid_of(&ctx).to_string()
            })
            .collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn other_variables_are_untouched() {
        let hook = UuidHook::new(Arc::new(SequentialIds::default()));
        let mut ctx = RequestContext::from_vars([
            ("uuid", json!("stale")),
            ("token", json!("abc")),
            ("count", json!(3)),
        ]);

        hook.call(&json!({"url": "/ignored"}), &mut ctx, &NoopEventEmitter).unwrap();

        assert_eq!(ctx.var("uuid"), Some(&json!("fixed-0")));
        assert_eq!(ctx.var("token"), Some(&json!("abc")));
        assert_eq!(ctx.var("count"), Some(&json!(3)));
        assert_eq!(ctx.vars().len(), 3);
    }

    #[test]
    fn continuation_runs_once_after_mutation() {
        let registry = HookRegistry::with_defaults(Arc::new(SequentialIds::default()));
        let mut ctx = RequestContext::new();
        let mut seen = Vec::new();

        registry
            .invoke("uuid", &Value::Null, &mut ctx, &NoopEventEmitter, |ctx| {
                seen.push(ctx.var("uuid").cloned());
            })
            .unwrap();

        assert_eq!(seen, vec![Some(json!("fixed-0"))]);
    }

    #[test]
    fn frozen_context_fails_without_continuation() {
        let registry = live_registry();
        let mut ctx = RequestContext::from_vars([("token", "abc")]).frozen();
        let mut called = false;

        let err = registry
            .invoke("uuid", &Value::Null, &mut ctx, &NoopEventEmitter, |_| called = true)
            .unwrap_err();

        assert_eq!(err, HookError::ContextFrozen { key: "uuid".into() });
        assert!(!called);
        assert!(ctx.var("uuid").is_none());
    }

    #[test]
    fn id_source_failure_propagates_without_continuation() {
        let registry = HookRegistry::with_defaults(Arc::new(DrainedIds));
        let mut ctx = RequestContext::from_vars([("token", "abc")]);
        let mut called = false;

        let err = registry
            .invoke("uuid", &Value::Null, &mut ctx, &NoopEventEmitter, |_| called = true)
            .unwrap_err();

        assert_eq!(err, HookError::IdSource("no ids left".into()));
        assert!(!called);
        assert!(ctx.var("uuid").is_none());
    }

    #[test]
    fn concurrent_requests_use_independent_contexts() {
        let hook = UuidHook::new(Arc::new(LiveIdGenerator::new()));
        let ids: Vec<String> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    s.spawn(|| {
                        let mut ctx = RequestContext::new();
                        hook.call(&Value::Null, &mut ctx, &NoopEventEmitter).unwrap();
                        uuid_of(&ctx).to_string()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 8);
    }
}

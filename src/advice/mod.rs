// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Interception strategies and the mode dispatcher.
//!
//! Each advice wraps the underlying call on the caller's thread, decides
//! what to record and when, and hands finished lines to the sink. The
//! [`Interceptor`] resolves a call site's mode once per invocation and
//! dispatches to the matching strategy; unmatched calls pass straight
//! through with no capture and no allocation.

mod after;
mod around;
mod before;


pub use after::AfterAdvice;
pub use around::AroundAdvice;
pub use before::BeforeAdvice;

use std::fmt::Display;
use std::sync::Arc;

use serde_json::Value;

use crate::record::CallSite;
use crate::registry::{AdviceRegistry, MatchMode};
use crate::sink::LogSink;

/// Entry point the host environment calls in place of the target method.
///
/// Holds the declaration registry and one instance of each advice, all
/// sharing the configured application name and sink. Immutable after
/// construction; safe to share across threads behind an `Arc`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use the_turnstile::advice::Interceptor;
/// use the_turnstile::record::CallSite;
/// use the_turnstile::registry::{AdviceRegistry, MatchMode};
/// use the_turnstile::sink::MemorySink;
///
/// let mut registry = AdviceRegistry::new();
/// registry.register_method("GreetingService", "greet", MatchMode::Before);
///
/// let sink = Arc::new(MemorySink::new());
/// let interceptor = Interceptor::new(registry, "demo-app", sink.clone());
///
/// let site = CallSite::new("GreetingService", "greet");
/// let out: Result<String, std::convert::Infallible> =
///     interceptor.invoke(site, Vec::new, || Ok("hello".to_string()));
///
/// assert_eq!(out.unwrap(), "hello");
/// assert_eq!(sink.lines().len(), 1);
/// ```
pub struct Interceptor {
    registry: AdviceRegistry,
    before: BeforeAdvice,
    after: AfterAdvice,
    around: AroundAdvice,
}

impl Interceptor {
    /// Wire an interceptor from a declaration registry, the application name
    /// embedded as `app` in every record, and the sink lines are written to.
    pub fn new(
        registry: AdviceRegistry,
        app_name: impl Into<String>,
        sink: Arc<dyn LogSink>,
    ) -> Self {
        let app = app_name.into();
        Self {
            before: BeforeAdvice::new(app.clone(), Arc::clone(&sink)),
            after: AfterAdvice::new(app.clone(), Arc::clone(&sink)),
            around: AroundAdvice::new(app, sink),
            registry,
        }
    }

    /// The declaration registry this interceptor resolves against.
    pub fn registry(&self) -> &AdviceRegistry {
        &self.registry
    }

    /// Invoke `target` for `site`, logging according to the resolved mode.
    ///
    /// `args` is a closure so that unmatched and after-only calls never pay
    /// for argument capture. Target errors propagate unchanged in every
    /// mode; logging never alters the call's outcome.
    pub fn invoke<T, E, A, F>(&self, site: CallSite, args: A, target: F) -> Result<T, E>
    where
        T: Display,
        A: FnOnce() -> Vec<Value>,
        F: FnOnce() -> Result<T, E>,
    {
        match self.registry.resolve(site.type_name, site.method_name) {
            MatchMode::None => target(),
            MatchMode::Before => self.before.invoke(site, args(), target),
            MatchMode::After => self.after.invoke(site, target),
            MatchMode::Around => self.around.invoke(site, args(), target),
        }
    }
}

impl std::fmt::Debug for Interceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interceptor")
            .field("type_specs", &self.registry.type_spec_count())
            .field("method_specs", &self.registry.method_spec_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    fn interceptor_with(
        build: impl FnOnce(&mut AdviceRegistry),
    ) -> (Interceptor, Arc<MemorySink>) {
        let mut registry = AdviceRegistry::new();
        build(&mut registry);
        let sink = Arc::new(MemorySink::new());
        let interceptor = Interceptor::new(registry, "test-app", sink.clone());
        (interceptor, sink)
    }

    #[test]
    fn unmatched_call_passes_through_silently() {
        let (interceptor, sink) = interceptor_with(|_| {});

        let out: Result<String, String> = interceptor.invoke(
            CallSite::new("Svc", "run"),
            || panic!("args must not be captured for unmatched calls"),
            || Ok("value".to_string()),
        );

        assert_eq!(out.unwrap(), "value");
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn unmatched_call_propagates_errors_untouched() {
        let (interceptor, sink) = interceptor_with(|_| {});

        let out: Result<String, String> = interceptor.invoke(
            CallSite::new("Svc", "run"),
            Vec::new,
            || Err("boom".to_string()),
        );

        assert_eq!(out.unwrap_err(), "boom");
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn after_mode_skips_argument_capture() {
        let (interceptor, sink) = interceptor_with(|r| {
            r.register_method("Svc", "run", MatchMode::After);
        });

        let out: Result<String, String> = interceptor.invoke(
            CallSite::new("Svc", "run"),
            || panic!("after-only advice must not capture args"),
            || Ok("done".to_string()),
        );

        assert_eq!(out.unwrap(), "done");
        assert_eq!(sink.lines().len(), 1);
    }

    #[test]
    fn dispatch_follows_resolved_mode() {
        let (interceptor, sink) = interceptor_with(|r| {
            r.register_type("Svc", MatchMode::Around);
            r.register_method("Svc", "quick", MatchMode::Before);
        });

        let _: Result<String, String> = interceptor.invoke(
            CallSite::new("Svc", "quick"),
            Vec::new,
            || Ok("a".to_string()),
        );
        assert_eq!(sink.lines().len(), 1, "before mode emits one line");
        assert!(sink.lines()[0].contains("before.rs"));

        sink.clear();
        let _: Result<String, String> = interceptor.invoke(
            CallSite::new("Svc", "slow"),
            Vec::new,
            || Ok("b".to_string()),
        );
        assert_eq!(sink.lines().len(), 2, "around mode emits a pair");
        assert!(sink.lines()[0].contains("around.rs"));
    }
}

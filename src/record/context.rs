// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use serde_json::Value;

/// Wall-clock time in milliseconds since the Unix epoch.
///
/// A pre-epoch system clock yields 0 rather than failing; record timestamps
/// are diagnostic data and must never abort the intercepted call.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Identity of an intercepted call site.
///
/// Call sites are static declarations, so both names are `&'static str`.
/// The rendered location `Type#method` is the tag downstream tooling filters
/// on by substring search.
///
/// # Examples
/// ```
/// use the_turnstile::record::CallSite;
///
/// let site = CallSite::new("GreetingService", "greet");
/// assert_eq!(site.location(), "GreetingService#greet");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub type_name: &'static str,
    pub method_name: &'static str,
}

impl CallSite {
    pub fn new(type_name: &'static str, method_name: &'static str) -> Self {
        Self {
            type_name,
            method_name,
        }
    }

    /// Qualified `Type#method` location tag.
    pub fn location(&self) -> String {
        format!("{}#{}", self.type_name, self.method_name)
    }
}

/// Immutable per-call snapshot taken at entry to a matched call.
///
/// Owned by the executing call frame and dropped when the call returns.
/// Captures the wall-clock start alongside a monotonic anchor so that
/// `end == start + cost` holds exactly even if the system clock steps
/// during the call.
///
/// Unmatched calls never construct a context; that is the hot-path
/// guarantee for undeclared methods.
#[derive(Debug)]
pub struct InvocationContext {
    site: CallSite,
    app: String,
    args: Vec<Value>,
    start_ms: i64,
    started: Instant,
}

impl InvocationContext {
    /// Snapshot the call site, application name, and arguments, capturing
    /// `start` immediately before delegation to the target.
    pub fn capture(site: CallSite, app: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            site,
            app: app.into(),
            args,
            start_ms: now_millis(),
            started: Instant::now(),
        }
    }

    pub fn site(&self) -> CallSite {
        self.site
    }

    pub fn app(&self) -> &str {
        &self.app
    }

    /// Arguments in declared parameter order.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Wall-clock start in epoch milliseconds.
    pub fn start_ms(&self) -> i64 {
        self.start_ms
    }

    /// Milliseconds elapsed since capture, from the monotonic anchor.
    ///
    /// Completion records derive `end` as `start + elapsed`, guaranteeing
    /// `start <= end` and an exact `cost == end - start` even if the system
    /// clock steps during the call.
    pub fn elapsed_ms(&self) -> i64 {
        self.started.elapsed().as_millis() as i64
    }
}

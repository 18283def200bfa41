// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use serde_json::Value;

use crate::record::{CallSite, InvocationContext, RecordBuilder};
use crate::sink::{format_line, LogSink};

/// Before-only interception: record entry, then delegate.
///
/// Emits one record (`start`, `args`, `app`) immediately before the target
/// runs. The target's outcome is not recorded; a failing target propagates
/// its error with the entry record already written.
pub struct BeforeAdvice {
    app: String,
    sink: Arc<dyn LogSink>,
}

impl BeforeAdvice {
    pub fn new(app: impl Into<String>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            app: app.into(),
            sink,
        }
    }

    pub fn invoke<T, E, F>(&self, site: CallSite, args: Vec<Value>, target: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let ctx = InvocationContext::capture(site, self.app.as_str(), args);
        let json = RecordBuilder::new()
            .field("start", Value::from(ctx.start_ms()))
            .field("args", Value::Array(ctx.args().to_vec()))
            .field("app", Value::from(ctx.app()))
            .serialize();
        self.sink.write_line(&format_line(&ctx.site(), file!(), &json));

        target()
    }
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::Display;
use std::sync::Arc;

use serde_json::Value;

use crate::record::{CallSite, InvocationContext, RecordBuilder};
use crate::sink::{format_line, LogSink};

/// Around interception: paired records bracketing the target.
///
/// Emits an entry record (`start`, `args`, `app`) immediately before
/// delegation and, on normal return, a completion record (`start`, `end`,
/// `cost`, `result`, `app`) computed from the same `start`, so
/// `cost == end - start` holds exactly between the two lines. Both lines
/// carry the same location tag and are written synchronously on the calling
/// frame, entry strictly first. A failing target leaves the entry record
/// standing alone.
pub struct AroundAdvice {
    app: String,
    sink: Arc<dyn LogSink>,
}

impl AroundAdvice {
    pub fn new(app: impl Into<String>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            app: app.into(),
            sink,
        }
    }

    pub fn invoke<T, E, F>(&self, site: CallSite, args: Vec<Value>, target: F) -> Result<T, E>
    where
        T: Display,
        F: FnOnce() -> Result<T, E>,
    {
        let ctx = InvocationContext::capture(site, self.app.as_str(), args);
        let entry = RecordBuilder::new()
            .field("start", Value::from(ctx.start_ms()))
            .field("args", Value::Array(ctx.args().to_vec()))
            .field("app", Value::from(ctx.app()))
            .serialize();
        self.sink.write_line(&format_line(&ctx.site(), file!(), &entry));

        let result = target()?;

        let cost = ctx.elapsed_ms();
        let completion = RecordBuilder::new()
            .field("start", Value::from(ctx.start_ms()))
            .field("end", Value::from(ctx.start_ms() + cost))
            .field("cost", Value::from(cost))
            .field("result", Value::from(result.to_string()))
            .field("app", Value::from(ctx.app()))
            .serialize();
        self.sink
            .write_line(&format_line(&ctx.site(), file!(), &completion));

        Ok(result)
    }
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Ordered record assembly and single-line JSON serialization.
//!
//! Records are JSON objects whose fields appear in insertion order; absent
//! fields are omitted entirely, never rendered as `null`. Both properties
//! are part of the contract with downstream log consumers.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::observability::messages::record::ArgCaptureFallback;

/// Capture a single call argument as a JSON value.
///
/// Best-effort by design: a value that fails to serialize is replaced with a
/// placeholder string rather than surfacing an error to the intercepted
/// call. The fallback is reported as a `tracing` diagnostic, not on the
/// record sink.
pub fn capture_arg<T: Serialize + ?Sized>(value: &T) -> Value {
    match serde_json::to_value(value) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("{}", ArgCaptureFallback { error: &e });
            Value::String(format!("<unserializable: {}>", e))
        }
    }
}

/// Builder for one call record.
///
/// # Examples
/// ```
/// use the_turnstile::record::RecordBuilder;
/// use serde_json::json;
///
/// let line = RecordBuilder::new()
///     .field("start", json!(1700000000000_i64))
///     .field("args", json!([]))
///     .field("app", json!("demo-app"))
///     .serialize();
///
/// assert_eq!(line, r#"{"start":1700000000000,"args":[],"app":"demo-app"}"#);
/// ```
#[derive(Debug, Default)]
pub struct RecordBuilder {
    fields: Map<String, Value>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field; fields serialize in the order they are added.
    pub fn field(mut self, name: &str, value: Value) -> Self {
        self.fields.insert(name.to_string(), value);
        self
    }

    /// Render the record as a single-line JSON object.
    ///
    /// Goes through `Value`'s `Display`, which cannot fail, so serialization
    /// can never escalate into a failure of the intercepted call.
    pub fn serialize(self) -> String {
        Value::Object(self.fields).to_string()
    }
}

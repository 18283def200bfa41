// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::Display;
use std::sync::Arc;

use serde_json::Value;

use crate::record::{now_millis, CallSite, RecordBuilder};
use crate::sink::{format_line, LogSink};

/// After-only interception: delegate first, record on success.
///
/// Emits one record (`end`, `result`, `app`) only when the target returns
/// normally. A failing target propagates its error and nothing is logged;
/// after-logging is log-on-success-only by policy.
pub struct AfterAdvice {
    app: String,
    sink: Arc<dyn LogSink>,
}

impl AfterAdvice {
    pub fn new(app: impl Into<String>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            app: app.into(),
            sink,
        }
    }

    pub fn invoke<T, E, F>(&self, site: CallSite, target: F) -> Result<T, E>
    where
        T: Display,
        F: FnOnce() -> Result<T, E>,
    {
        let result = target()?;

        let json = RecordBuilder::new()
            .field("end", Value::from(now_millis()))
            .field("result", Value::from(result.to_string()))
            .field("app", Value::from(self.app.as_str()))
            .serialize();
        self.sink.write_line(&format_line(&site, file!(), &json));

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    fn advice() -> (AfterAdvice, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        (AfterAdvice::new("test-app", sink.clone()), sink)
    }

    fn json_part(line: &str) -> serde_json::Value {
        let idx = line.find(" - ").expect("line has separator");
        serde_json::from_str(&line[idx + 3..]).expect("line carries valid JSON")
    }

    #[test]
    fn emits_completion_record_on_success() {
        let (advice, sink) = advice();

        let out: Result<String, String> = advice.invoke(
            CallSite::new("GreetingService", "greet"),
            || Ok("hello, jerry".to_string()),
        );
        let observed_after = now_millis();

        assert_eq!(out.unwrap(), "hello, jerry");

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[GreetingService#greet]"));
        assert!(lines[0].contains("after.rs"));

        let record = json_part(&lines[0]);
        let keys: Vec<&String> = record.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["end", "result", "app"]);
        assert!(record["end"].as_i64().unwrap() <= observed_after);
        assert_eq!(record["result"], "hello, jerry");
        assert_eq!(record["app"], "test-app");
    }

    #[test]
    fn result_uses_display_rendering() {
        let (advice, sink) = advice();

        let _: Result<u64, String> =
            advice.invoke(CallSite::new("Svc", "count"), || Ok(42));

        let record = json_part(&sink.lines()[0]);
        assert_eq!(record["result"], "42");
    }

    #[test]
    fn failing_target_emits_nothing() {
        let (advice, sink) = advice();

        let out: Result<String, String> = advice.invoke(
            CallSite::new("Svc", "fail"),
            || Err("target failed".to_string()),
        );

        assert_eq!(out.unwrap_err(), "target failed");
        assert!(sink.lines().is_empty());
    }
}

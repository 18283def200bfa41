// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

#[cfg(test)]
mod integration_tests {
    use std::io::Write;
    use std::sync::Arc;

    use serde_json::json;

    use crate::config::{load_and_validate_config, RuntimeBuilder};
    use crate::record::{capture_arg, CallSite};
    use crate::registry::MatchMode;
    use crate::sink::MemorySink;

    /// Test that the bundled demo configuration loads and wires correctly.
    #[test]
    fn test_demo_yaml_loading() {
        let config = load_and_validate_config("configs/demo.yaml").unwrap();

        assert_eq!(config.app_name, "turnstile-demo");
        assert_eq!(config.targets.len(), 2);
        assert_eq!(config.targets[0].type_name, "GreetingService");
        assert_eq!(config.targets[0].mode, Some(MatchMode::Around));
        assert_eq!(config.targets[0].methods[0].name, "ping");
        assert_eq!(config.targets[0].methods[0].mode, MatchMode::Before);
        assert_eq!(config.targets[1].type_name, "BillingService");
        assert_eq!(config.targets[1].mode, None);
    }

    /// End to end: file on disk -> runtime -> intercepted calls -> records.
    #[test]
    fn test_file_to_records_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"
app_name: roundtrip-app
targets:
  - type: GreetingService
    mode: around
    methods:
      - name: ping
        mode: before
"#,
        )
        .unwrap();

        let config = load_and_validate_config(file.path()).unwrap();
        let sink = Arc::new(MemorySink::new());
        let interceptor = RuntimeBuilder::from_config(&config, sink.clone());

        // Method-level override: before-only, one line.
        let out: Result<String, String> = interceptor.invoke(
            CallSite::new("GreetingService", "ping"),
            Vec::new,
            || Ok("pong".to_string()),
        );
        assert_eq!(out.unwrap(), "pong");
        assert_eq!(sink.lines().len(), 1);
        assert!(sink.lines()[0].contains("before.rs"));

        // Type-level around: paired lines with the configured app name.
        sink.clear();
        let out: Result<String, String> = interceptor.invoke(
            CallSite::new("GreetingService", "greet"),
            || vec![capture_arg("jerry")],
            || Ok("hello, jerry".to_string()),
        );
        assert_eq!(out.unwrap(), "hello, jerry");

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        let entry: serde_json::Value =
            serde_json::from_str(&lines[0][lines[0].find(" - ").unwrap() + 3..]).unwrap();
        assert_eq!(entry["app"], "roundtrip-app");
        assert_eq!(entry["args"], json!(["jerry"]));

        // Undeclared type stays silent.
        sink.clear();
        let out: Result<String, String> = interceptor.invoke(
            CallSite::new("InventoryService", "count"),
            Vec::new,
            || Ok("12".to_string()),
        );
        assert_eq!(out.unwrap(), "12");
        assert!(sink.lines().is_empty());
    }
}

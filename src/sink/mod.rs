// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Log line emission seam.
//!
//! The advice path formats a complete line and hands it to a [`LogSink`];
//! transport is the sink's problem. Writes are fire-and-forget: a sink never
//! reports failure back to the intercepted call.

use std::sync::Mutex;

use crate::record::CallSite;

/// Render a record line: `[Type#method] [origin] - <json>`.
///
/// The bracketed location and advice-origin tags are what downstream tooling
/// filters on by substring search; the JSON object follows the `" - "`
/// separator.
pub fn format_line(site: &CallSite, origin: &str, json: &str) -> String {
    format!("[{}] [{}] - {}", site.location(), origin, json)
}

/// Destination for formatted record lines.
///
/// Implementations must tolerate concurrent writers; calls on different
/// threads may interleave lines, but each `write_line` hands over one
/// complete record.
pub trait LogSink: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Sink that appends each line to stdout.
///
/// Matches a console log appender: one record per line, no buffering beyond
/// the platform's.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write_line(&self, line: &str) {
        println!("{}", line);
    }
}

/// Sink that routes lines through the `tracing` facade at info level.
#[derive(Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write_line(&self, line: &str) {
        tracing::info!(target: "method_log", "{}", line);
    }
}

/// In-memory sink for tests and embedders that inspect emitted records.
///
/// # Examples
/// ```
/// use the_turnstile::sink::{LogSink, MemorySink};
///
/// let sink = MemorySink::new();
/// sink.write_line("[Svc#run] [advice] - {}");
/// assert_eq!(sink.lines().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines written so far, in write order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Drop any captured lines.
    pub fn clear(&self) {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(line.to_string());
    }
}

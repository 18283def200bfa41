// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for the crate's own diagnostics.
//!
//! Message types here follow a struct-based pattern with `Display`
//! implementations and are emitted through `tracing`. They describe the
//! interception machinery itself (config loading, registry construction,
//! capture fallbacks) and are deliberately separate from the method-log
//! records, which go only to the configured [`crate::sink::LogSink`].
//!
//! # Usage
//!
//! ```rust
//! use the_turnstile::observability::messages::config::ConfigLoaded;
//!
//! let msg = ConfigLoaded {
//!     app_name: "demo-app",
//!     target_count: 3,
//! };
//!
//! tracing::info!("{}", msg);
//! ```

pub mod messages;

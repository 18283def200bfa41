// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured diagnostics.
//!
//! Each message type implements the `Display` trait to provide consistent,
//! human-readable output while keeping format strings out of the call path.
//!
//! # Organization
//!
//! * `config` - Configuration loading and runtime wiring events
//! * `record` - Record assembly and argument capture events

pub mod config;
pub mod record;

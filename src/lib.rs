// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod advice;     // before/after/around interception strategies
pub mod config;     // config + runtime wiring
pub mod errors;     // error handling
pub mod observability;
pub mod record;     // call context + record serialization
pub mod registry;   // match-mode resolution
pub mod sink;       // log line emission

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod builder;
mod context;

pub use builder::{capture_arg, RecordBuilder};
pub use context::{now_millis, CallSite, InvocationContext};

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod runtime;

#[cfg(test)]
mod integration_tests;

pub use loader::{load_and_validate_config, load_config, Config, MethodSpec, TargetSpec};
pub use runtime::RuntimeBuilder;

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors that can occur while loading and validating configuration.
///
/// These only arise at startup; nothing on the interception call path
/// returns an error. Logging is a side channel and its failures never reach
/// the intercepted method's caller.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid YAML for the expected shape
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// `app_name` is required and must be non-empty; it is embedded verbatim
    /// as `app` in every record
    #[error("config must declare a non-empty app_name")]
    MissingAppName,

    /// The same target type appears more than once
    #[error("duplicate target declaration for type '{type_name}'")]
    DuplicateTarget { type_name: String },
}

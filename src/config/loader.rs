// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::ConfigError;
use crate::registry::MatchMode;

/// Main configuration structure for the interception runtime.
///
/// Declares the application name embedded as `app` in every record, plus the
/// static table of call sites to intercept. Declarations are fixed once the
/// host environment starts; there is no hot reload.
///
/// # Fields
/// * `app_name` - Application identifier, required and non-empty
/// * `targets` - Target type declarations defining what gets intercepted
///
/// # Example
/// ```yaml
/// app_name: demo-app
/// targets:
///   - type: GreetingService
///     mode: around
///     methods:
///       - name: greet
///         mode: before
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    pub app_name: String,
    #[serde(default)]
    pub targets: Vec<TargetSpec>,
}

/// Interception declarations for one target type.
///
/// A type-level `mode` covers every method of the type; entries in `methods`
/// override it entirely for the named method. A target with neither a
/// type-level mode nor method entries declares nothing.
///
/// # Fields
/// * `type_name` - The target type, written as `type` in YAML
/// * `mode` - Optional type-level interception mode
/// * `methods` - Method-level overrides
#[derive(Debug, Deserialize)]
pub struct TargetSpec {
    #[serde(rename = "type")]
    pub type_name: String,
    pub mode: Option<MatchMode>,
    #[serde(default)]
    pub methods: Vec<MethodSpec>,
}

/// Method-level interception declaration.
#[derive(Debug, Deserialize)]
pub struct MethodSpec {
    pub name: String,
    pub mode: MatchMode,
}

/// Load a config from a YAML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load and validate a config from a YAML file.
///
/// Beyond parsing, rejects an empty `app_name` and duplicate target type
/// declarations. Conflicting modes within one target are not an error; the
/// registry's method-over-type precedence resolves them deterministically.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;

    if cfg.app_name.trim().is_empty() {
        return Err(ConfigError::MissingAppName);
    }

    let mut seen = HashSet::new();
    for target in &cfg.targets {
        if !seen.insert(target.type_name.as_str()) {
            return Err(ConfigError::DuplicateTarget {
                type_name: target.type_name.clone(),
            });
        }
    }

    Ok(cfg)
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::advice::Interceptor;
use crate::config::Config;
use crate::observability::messages::config::{ConfigLoaded, RegistryBuilt};
use crate::registry::AdviceRegistry;
use crate::sink::LogSink;

/// Interception runtime builder - wires registry, advice set, and sink from
/// configuration.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use the_turnstile::config::{Config, RuntimeBuilder};
/// use the_turnstile::sink::MemorySink;
///
/// let config: Config = serde_yaml::from_str(
///     "app_name: demo-app\ntargets:\n  - type: Svc\n    mode: before\n",
/// ).unwrap();
///
/// let sink = Arc::new(MemorySink::new());
/// let interceptor = RuntimeBuilder::from_config(&config, sink);
///
/// assert_eq!(interceptor.registry().type_spec_count(), 1);
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build a ready-to-use [`Interceptor`] from configuration.
    ///
    /// Registers each target's type-level mode (when present) and every
    /// method-level override, then wires the advice set around the given
    /// sink.
    pub fn from_config(cfg: &Config, sink: Arc<dyn LogSink>) -> Interceptor {
        let mut registry = AdviceRegistry::new();

        for target in &cfg.targets {
            if let Some(mode) = target.mode {
                registry.register_type(target.type_name.clone(), mode);
            }
            for method in &target.methods {
                registry.register_method(
                    target.type_name.clone(),
                    method.name.clone(),
                    method.mode,
                );
            }
        }

        tracing::info!(
            "{}",
            ConfigLoaded {
                app_name: &cfg.app_name,
                target_count: cfg.targets.len(),
            }
        );
        tracing::debug!(
            "{}",
            RegistryBuilt {
                type_specs: registry.type_spec_count(),
                method_specs: registry.method_spec_count(),
            }
        );

        Interceptor::new(registry, cfg.app_name.clone(), sink)
    }
}

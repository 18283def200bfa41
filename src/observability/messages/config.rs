// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading and runtime wiring events.

use std::fmt::{Display, Formatter};

/// Configuration file loaded and validated.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_turnstile::observability::messages::config::ConfigLoaded;
///
/// let msg = ConfigLoaded {
///     app_name: "demo-app",
///     target_count: 2,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ConfigLoaded<'a> {
    pub app_name: &'a str,
    pub target_count: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Configuration loaded for app '{}': {} target declaration(s)",
            self.app_name, self.target_count
        )
    }
}

/// Advice registry assembled from configuration.
///
/// # Log Level
/// `debug!` - Wiring detail useful when declarations do not match
///
/// # Example
/// ```
/// use the_turnstile::observability::messages::config::RegistryBuilt;
///
/// let msg = RegistryBuilt {
///     type_specs: 1,
///     method_specs: 3,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct RegistryBuilt {
    pub type_specs: usize,
    pub method_specs: usize,
}

impl Display for RegistryBuilt {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Advice registry built: {} type-level spec(s), {} method-level spec(s)",
            self.type_specs, self.method_specs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_loaded_renders_counts() {
        let msg = ConfigLoaded {
            app_name: "svc",
            target_count: 4,
        };
        assert_eq!(
            msg.to_string(),
            "Configuration loaded for app 'svc': 4 target declaration(s)"
        );
    }
}

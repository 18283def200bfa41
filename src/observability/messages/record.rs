// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for record assembly and argument capture events.

use std::fmt::{Display, Formatter};

/// An argument could not be serialized and was replaced with a placeholder.
///
/// The intercepted call is unaffected; the record carries a best-effort
/// string in place of the value.
///
/// # Log Level
/// `warn!` - Degraded record content
///
/// # Example
/// ```
/// use the_turnstile::observability::messages::record::ArgCaptureFallback;
///
/// let mut weird = std::collections::HashMap::new();
/// weird.insert((1, 2), "value");
/// let error = serde_json::to_value(&weird).unwrap_err();
/// let msg = ArgCaptureFallback { error: &error };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct ArgCaptureFallback<'a> {
    pub error: &'a dyn std::error::Error,
}

impl Display for ArgCaptureFallback<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Argument capture fell back to placeholder: {}",
            self.error
        )
    }
}

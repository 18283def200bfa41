// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Match-mode resolution for intercepted call sites.
//!
//! The registry holds the static declaration table built once at startup:
//! type-level declarations apply to every method of a type, method-level
//! declarations override them entirely for that method. Resolution is a
//! deterministic pair of hash lookups over an immutable table, so it is safe
//! for any number of concurrent readers without locking.

use std::collections::HashMap;

use serde::Deserialize;

/// Interception mode for a resolved call site.
///
/// Exactly one mode applies to any (type, method) pair at resolution time.
///
/// # Variants
/// * `None` - Not intercepted; the call passes through untouched
/// * `Before` - One record emitted before delegation
/// * `After` - One record emitted after a successful return
/// * `Around` - Paired records around delegation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    #[default]
    None,
    Before,
    After,
    Around,
}

/// Declaration table mapping call sites to interception modes.
///
/// Mirrors a two-level annotation scheme: a type-level declaration covers all
/// of a type's methods, and a method-level declaration replaces (never merges
/// with) the type-level one for that method. Re-registering a key replaces
/// the previous mode.
///
/// # Examples
/// ```
/// use the_turnstile::registry::{AdviceRegistry, MatchMode};
///
/// let mut registry = AdviceRegistry::new();
/// registry.register_type("GreetingService", MatchMode::Around);
/// registry.register_method("GreetingService", "greet", MatchMode::Before);
///
/// // Method-level declaration wins outright.
/// assert_eq!(registry.resolve("GreetingService", "greet"), MatchMode::Before);
/// // Sibling method inherits the type-level declaration.
/// assert_eq!(registry.resolve("GreetingService", "farewell"), MatchMode::Around);
/// // Undeclared types resolve to None.
/// assert_eq!(registry.resolve("BillingService", "quote"), MatchMode::None);
/// ```
#[derive(Debug, Default)]
pub struct AdviceRegistry {
    type_specs: HashMap<String, MatchMode>,
    method_specs: HashMap<String, HashMap<String, MatchMode>>,
}

impl AdviceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a type-level mode covering every method of `type_name`.
    pub fn register_type(&mut self, type_name: impl Into<String>, mode: MatchMode) {
        self.type_specs.insert(type_name.into(), mode);
    }

    /// Declare a method-level mode for `type_name::method_name`.
    ///
    /// Overrides any type-level declaration for this one method.
    pub fn register_method(
        &mut self,
        type_name: impl Into<String>,
        method_name: impl Into<String>,
        mode: MatchMode,
    ) {
        self.method_specs
            .entry(type_name.into())
            .or_default()
            .insert(method_name.into(), mode);
    }

    /// Resolve the effective mode for a call site.
    ///
    /// Precedence: method-level declaration, then type-level declaration,
    /// then `MatchMode::None`. No wildcard matching, no walk beyond the
    /// declaring type.
    pub fn resolve(&self, type_name: &str, method_name: &str) -> MatchMode {
        if let Some(mode) = self
            .method_specs
            .get(type_name)
            .and_then(|methods| methods.get(method_name))
        {
            return *mode;
        }
        self.type_specs
            .get(type_name)
            .copied()
            .unwrap_or(MatchMode::None)
    }

    /// Number of type-level declarations.
    pub fn type_spec_count(&self) -> usize {
        self.type_specs.len()
    }

    /// Number of method-level declarations across all types.
    pub fn method_spec_count(&self) -> usize {
        self.method_specs.values().map(HashMap::len).sum()
    }
}

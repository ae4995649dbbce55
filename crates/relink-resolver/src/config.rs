//! Resolver configuration supplied by the embedding application.

use serde::{Deserialize, Serialize};

/// Feature toggles and the eager-compilation list.
///
/// Both toggles default to off; `resolve` on a resolver with both disabled
/// is a logged no-op.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Rewrite reference fields to hold resolved nodes.
    pub fix_references: bool,
    /// Clear the timezone designator on temporal fields.
    pub strip_timezones: bool,
    /// Fully-qualified type names to compile at startup. Unknown names are
    /// logged and skipped; the type may still be compiled lazily later.
    pub compile_types: Vec<String>,
}

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod tests;

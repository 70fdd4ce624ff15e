//! The source registry: name → handler lookup table.

use std::collections::HashMap;
use std::sync::Arc;

use crate::handler::SourceHandler;
use crate::sources::{dockerhub::DockerHub, quay::Quay};

/// Read-only table mapping source-type names to their handlers.
///
/// Built explicitly at startup and passed into endpoint compilation — no
/// process-wide global — so tests can compile endpoints against a registry
/// of stubs. Never mutated after construction; a name missing here is a
/// configuration error surfaced at compile time, not a request-time fault.
pub struct SourceRegistry {
    handlers: HashMap<&'static str, Arc<dyn SourceHandler>>,
}

impl SourceRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// A registry with every built-in source registered.
    pub fn with_default_sources() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(DockerHub));
        registry.register(Arc::new(Quay));
        registry
    }

    /// Register a handler under its own source name.
    ///
    /// Registration happens during startup, before any endpoint is
    /// compiled. A later registration under the same name replaces the
    /// earlier one.
    pub fn register(&mut self, handler: Arc<dyn SourceHandler>) {
        self.handlers.insert(handler.source_name(), handler);
    }

    /// Look up the handler for a source-type name.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn SourceHandler>> {
        self.handlers.get(name).cloned()
    }

    /// Registered source names, sorted, for configuration error messages.
    pub fn source_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::with_default_sources()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

//! The resolver facade: owns the schema, the filter and accessor
//! capabilities, the configuration, and the compiled registries, and exposes
//! the graph operations.

use tracing::{info, warn};

use relink_model::{FieldAccessor, NodeRef, Schema, TypeFilter};

use crate::config::ResolverConfig;
use crate::registry::SchemaRegistry;

pub struct Resolver {
    pub(crate) schema: Schema,
    pub(crate) filter: Box<dyn TypeFilter>,
    pub(crate) accessor: Box<dyn FieldAccessor>,
    pub(crate) config: ResolverConfig,
    pub(crate) registry: SchemaRegistry,
}

impl Resolver {
    pub fn new(
        schema: Schema,
        filter: Box<dyn TypeFilter>,
        accessor: Box<dyn FieldAccessor>,
        config: ResolverConfig,
    ) -> Self {
        Self::with_registry(schema, filter, accessor, config, SchemaRegistry::new())
    }

    /// Construct with a pre-populated registry, for embeddings that compile
    /// their schema once up front and share the result across resolvers.
    /// The registry is single-writer-then-many-readers: all compilation
    /// must finish before reads are shared.
    pub fn with_registry(
        schema: Schema,
        filter: Box<dyn TypeFilter>,
        accessor: Box<dyn FieldAccessor>,
        config: ResolverConfig,
        registry: SchemaRegistry,
    ) -> Self {
        Self {
            schema,
            filter,
            accessor,
            config,
            registry,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Eagerly compile the configured type names. A name the schema does
    /// not know is logged and skipped; it can still be compiled lazily if
    /// an instance of it is encountered later.
    pub fn initialize(&mut self) {
        let names = self.config.compile_types.clone();
        for name in names {
            match self.schema.lookup(&name) {
                Some(ty) => {
                    self.compile(ty);
                }
                None => {
                    warn!(type_name = %name, "type not found in schema; skipping eager compilation");
                }
            }
        }
        info!("completed compilations");
    }

    /// Run the enabled fix-up passes over `graph`, in place.
    ///
    /// Builds the identifier table and links references when reference
    /// fixing is enabled, then strips timezones when enabled. Returns the
    /// same instance. `None` passes through; with both toggles disabled the
    /// graph is returned untouched under a warning. Failures inside a pass
    /// are logged at field granularity and never propagate: the caller
    /// always gets the (possibly partially fixed) graph back.
    pub fn resolve(&mut self, graph: Option<NodeRef>) -> Option<NodeRef> {
        let root = graph?;
        if !self.config.fix_references && !self.config.strip_timezones {
            warn!("both 'fix_references' and 'strip_timezones' are turned off or not set");
            return Some(root);
        }
        self.ensure_compiled(&root);
        if self.config.fix_references {
            let ids = self.collect_id_table(&root);
            if !ids.is_empty() {
                self.link_references(&root, &ids);
            }
        }
        if self.config.strip_timezones {
            self.strip_node_timezones(&root);
        }
        Some(root)
    }

    /// Prepend `prefix` (plus the separator) to every identifier in the
    /// graph. Used before merging graphs sourced from different parties.
    pub fn add_prefix(&mut self, graph: Option<NodeRef>, prefix: &str) -> Option<NodeRef> {
        let root = graph?;
        self.ensure_compiled(&root);
        let prefix = Self::separated(prefix);
        self.rewrite_prefix(&root, &prefix, true);
        Some(root)
    }

    /// Remove the `prefix` token (plus the separator) from every identifier
    /// in the graph. Removal is by substring, not anchored to the start of
    /// the identifier.
    pub fn strip_prefix(&mut self, graph: Option<NodeRef>, prefix: &str) -> Option<NodeRef> {
        let root = graph?;
        self.ensure_compiled(&root);
        let prefix = Self::separated(prefix);
        self.rewrite_prefix(&root, &prefix, false);
        Some(root)
    }

    /// Run the temporal pass alone.
    pub fn normalize_temporal(&mut self, graph: &NodeRef) {
        self.ensure_compiled(graph);
        self.strip_node_timezones(graph);
    }

    /// Implicit compile guard: every graph operation compiles the root's
    /// concrete type first if it has not been seen before.
    fn ensure_compiled(&mut self, root: &NodeRef) {
        let ty = root.type_id();
        if !self.registry.is_compiled(ty) {
            self.compile(ty);
        }
    }

    fn separated(prefix: &str) -> String {
        format!("{prefix}-")
    }
}

#[cfg(test)]
#[path = "../tests/resolve_tests.rs"]
mod tests;

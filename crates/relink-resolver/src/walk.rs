//! Shared traversal contract for the graph passes.
//!
//! Every pass walks the same way: for an instance, follow its runtime
//! type's ancestor chain (stopping at the first ancestor outside the
//! filter), look up the pass's registered fields for each chain type, read
//! each value through the accessor, and hand scalar/array/list values to
//! the pass uniformly. Traversal is per incoming path, not globally
//! deduplicated: a node reachable twice is visited twice, which is fine
//! because passes are idempotent or additive.

use tracing::warn;

use relink_model::{FieldDef, FieldId, NodeRef, TypeId, Value};

use crate::resolver::Resolver;

/// Supertype chain of a runtime type, cut off at the first ancestor the
/// type filter excludes.
pub(crate) struct AncestorChain<'a> {
    resolver: &'a Resolver,
    next: Option<TypeId>,
}

impl Iterator for AncestorChain<'_> {
    type Item = TypeId;

    fn next(&mut self) -> Option<TypeId> {
        let current = self.next?;
        self.next = self
            .resolver
            .schema
            .type_def(current)
            .supertype
            .filter(|sup| self.resolver.is_included(*sup));
        Some(current)
    }
}

impl Resolver {
    pub(crate) fn chain(&self, ty: TypeId) -> AncestorChain<'_> {
        AncestorChain {
            resolver: self,
            next: Some(ty),
        }
    }

    pub(crate) fn is_included(&self, ty: TypeId) -> bool {
        self.filter.contains(&self.schema, ty)
    }

    /// Read a registered field's value. Access failures are logged and the
    /// field skipped; unset and null fields read as `None`.
    pub(crate) fn read_field(&self, node: &NodeRef, owner: TypeId, field: FieldId) -> Option<Value> {
        let def = self.schema.field(owner, field);
        match self.accessor.get(node, def) {
            Ok(value) => value.filter(|v| !v.is_null()),
            Err(err) => {
                warn!(%err, "skipping unreadable field");
                None
            }
        }
    }

    /// Write a field value back. Failures are logged; the pass continues.
    pub(crate) fn write_field(&self, node: &NodeRef, def: &FieldDef, value: Value) {
        if let Err(err) = self.accessor.set(node, def, value) {
            warn!(%err, "skipping unwritable field");
        }
    }
}

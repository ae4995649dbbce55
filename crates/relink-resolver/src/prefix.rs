//! Prefix pass: adds or removes a party prefix on every identifier in the
//! graph, so graphs sourced from different parties can be merged without
//! identifier collisions.
//!
//! Recursion here is broader than in the other passes: identifiers may be
//! nested under fields that carry no role at all, so in addition to the
//! identifier registry the pass descends through every compound field with
//! a filter-included element type (the descent registry).

use indexmap::IndexSet;

use relink_model::{FieldId, FieldTags, NodeRef, TypeId, Value};

use crate::resolver::Resolver;
use crate::role::FieldRole;

impl Resolver {
    /// Rewrite identifiers under `node`. `prefix` already carries the
    /// separator. Add mode prepends it; strip mode deletes every occurrence
    /// of it, wherever it appears in the identifier text.
    pub(crate) fn rewrite_prefix(&self, node: &NodeRef, prefix: &str, add: bool) {
        for key in self.chain(node.type_id()) {
            let fields = self.prefix_fields(key);
            for fid in fields {
                let Some(value) = self.read_field(node, key, fid) else {
                    continue;
                };
                match value {
                    Value::Text(text) => {
                        if !self.schema.field(key, fid).tags.contains(FieldTags::ID) {
                            continue;
                        }
                        let rewritten = if add {
                            format!("{prefix}{text}")
                        } else {
                            text.replace(prefix, "")
                        };
                        let def = self.schema.field(key, fid);
                        self.write_field(node, def, Value::Text(rewritten));
                    }
                    Value::Array(items) | Value::List(items) => {
                        for item in items {
                            if let Value::Node(child) = item
                                && self.is_included(child.type_id())
                            {
                                self.rewrite_prefix(&child, prefix, add);
                            }
                        }
                    }
                    Value::Node(child) => {
                        if self.is_included(child.type_id()) {
                            self.rewrite_prefix(&child, prefix, add);
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    /// Union of the identifier registry and the descent registry for one
    /// chain type, in registration order.
    fn prefix_fields(&self, key: TypeId) -> IndexSet<FieldId> {
        let mut fields = IndexSet::new();
        if let Some(ids) = self.registry.fields(FieldRole::Identifier, key) {
            fields.extend(ids.iter().copied());
        }
        if let Some(descent) = self.registry.descent_fields(key) {
            fields.extend(descent.iter().copied());
        }
        fields
    }
}

#[cfg(test)]
#[path = "../tests/prefix_tests.rs"]
mod tests;

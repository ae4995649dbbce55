//! Identifier-table pass: one walk over the identifier registry collecting
//! every textual identifier value and the node that owns it.

use rustc_hash::FxHashMap;

use relink_model::{FieldTags, NodeRef, Value};

use crate::resolver::Resolver;
use crate::role::FieldRole;

/// Identifier text to owning node. Duplicate identifiers are last-write-wins:
/// the table holds whichever owner the build pass saw last, with no
/// uniqueness enforcement.
pub(crate) type IdTable = FxHashMap<String, NodeRef>;

impl Resolver {
    /// Build the identifier table for one `resolve` invocation. The table
    /// is scoped to that invocation and discarded afterwards.
    pub(crate) fn collect_id_table(&self, root: &NodeRef) -> IdTable {
        let mut table = IdTable::default();
        self.collect_ids(root, &mut table);
        table
    }

    fn collect_ids(&self, node: &NodeRef, table: &mut IdTable) {
        for key in self.chain(node.type_id()) {
            let Some(fields) = self.registry.fields(FieldRole::Identifier, key) else {
                continue;
            };
            for &fid in fields {
                let Some(value) = self.read_field(node, key, fid) else {
                    continue;
                };
                match value {
                    Value::Text(text) => {
                        // Only directly tagged identifier fields feed the
                        // table; typed (non-textual) identifiers are ignored.
                        if self.schema.field(key, fid).tags.contains(FieldTags::ID) {
                            table.insert(text, node.clone());
                        }
                    }
                    Value::Array(items) | Value::List(items) => {
                        for item in items {
                            if let Value::Node(child) = item
                                && self.is_included(child.type_id())
                            {
                                self.collect_ids(&child, table);
                            }
                        }
                    }
                    Value::Node(child) => {
                        if self.is_included(child.type_id()) {
                            self.collect_ids(&child, table);
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}

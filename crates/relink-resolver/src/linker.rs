//! Reference-linking pass: resolves identifier tokens held by reference
//! fields against the identifier table and rewrites the fields to hold the
//! referenced nodes directly.
//!
//! A reference value is whitespace-tokenized, so a single string can carry
//! several identifiers. Collection-valued fields keep every match, in
//! order, written back in their original runtime shape. A scalar field
//! keeps only the first resolved match, even when several tokens resolve.
//! Unmatched tokens are logged and dropped; they never fail the pass, and a
//! field where nothing resolved keeps its pre-resolution value.

use smallvec::SmallVec;
use tracing::error;

use relink_model::{FieldId, FieldTags, NodeRef, TypeId, Value};

use crate::id_table::IdTable;
use crate::resolver::Resolver;
use crate::role::FieldRole;

impl Resolver {
    pub(crate) fn link_references(&self, root: &NodeRef, table: &IdTable) {
        self.link_node(root, table);
    }

    fn link_node(&self, node: &NodeRef, table: &IdTable) {
        for key in self.chain(node.type_id()) {
            let Some(fields) = self.registry.fields(FieldRole::Reference, key) else {
                continue;
            };
            for &fid in fields {
                let Some(value) = self.read_field(node, key, fid) else {
                    continue;
                };
                let tags = self.schema.field(key, fid).tags;
                if tags.intersects(FieldTags::IDREF | FieldTags::MULTI_REF) {
                    self.resolve_reference(node, key, fid, value, table);
                    continue;
                }
                // Compound field registered because references live
                // somewhere beneath it: ordinary traversal continuation.
                match value {
                    Value::Array(items) | Value::List(items) => {
                        for item in items {
                            if let Value::Node(child) = item
                                && self.is_included(child.type_id())
                            {
                                self.link_node(&child, table);
                            }
                        }
                    }
                    Value::Node(child) => {
                        if self.is_included(child.type_id()) {
                            self.link_node(&child, table);
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    fn resolve_reference(
        &self,
        owner: &NodeRef,
        key: TypeId,
        fid: FieldId,
        value: Value,
        table: &IdTable,
    ) {
        match value {
            Value::Text(text) => {
                // A scalar reference may still carry several tokens; only
                // the first resolved match is kept.
                let matches = lookup_tokens(table, &text);
                if let Some(first) = matches.first() {
                    let def = self.schema.field(key, fid);
                    self.write_field(owner, def, Value::Node(first.clone()));
                }
            }
            Value::Array(items) => {
                self.resolve_reference_collection(owner, key, fid, items, true, table);
            }
            Value::List(items) => {
                self.resolve_reference_collection(owner, key, fid, items, false, table);
            }
            _ => {}
        }
    }

    fn resolve_reference_collection(
        &self,
        owner: &NodeRef,
        key: TypeId,
        fid: FieldId,
        items: Vec<Value>,
        as_array: bool,
        table: &IdTable,
    ) {
        let mut resolved: Vec<Value> = Vec::new();
        let mut any_matched = false;
        for item in items {
            let token = match item {
                // Structured elements are ordinary graph members, not
                // reference tokens.
                Value::Node(child) => {
                    self.link_node(&child, table);
                    continue;
                }
                other => match other.coerce_token() {
                    Some(token) => token,
                    None => continue,
                },
            };
            let matches = lookup_tokens(table, &token);
            if matches.is_empty() {
                let def = self.schema.field(key, fid);
                error!(
                    owner = %self.schema.type_def(key).name,
                    field = %def.name,
                    token = %token,
                    "identifier not found for reference token"
                );
                continue;
            }
            any_matched = true;
            resolved.extend(matches.into_iter().map(Value::Node));
        }
        // Write back whatever subset resolved, preserving order and the
        // field's original runtime shape; leave the raw value in place when
        // nothing matched.
        if any_matched {
            let def = self.schema.field(key, fid);
            let value = if as_array {
                Value::Array(resolved)
            } else {
                Value::List(resolved)
            };
            self.write_field(owner, def, value);
        }
    }
}

fn lookup_tokens(table: &IdTable, text: &str) -> SmallVec<[NodeRef; 2]> {
    let mut found = SmallVec::new();
    for token in text.split_whitespace() {
        if let Some(node) = table.get(token) {
            found.push(node.clone());
        }
    }
    found
}

#[cfg(test)]
#[path = "../tests/linker_tests.rs"]
mod tests;

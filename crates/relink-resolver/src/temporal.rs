//! Temporal pass: clears the timezone designator on every temporal field.

use relink_model::{NodeRef, Value};

use crate::resolver::Resolver;
use crate::role::FieldRole;

impl Resolver {
    pub(crate) fn strip_node_timezones(&self, node: &NodeRef) {
        for key in self.chain(node.type_id()) {
            let Some(fields) = self.registry.fields(FieldRole::Temporal, key) else {
                continue;
            };
            for &fid in fields {
                let Some(value) = self.read_field(node, key, fid) else {
                    continue;
                };
                match value {
                    Value::Temporal(mut stamp) => {
                        stamp.clear_timezone();
                        let def = self.schema.field(key, fid);
                        self.write_field(node, def, Value::Temporal(stamp));
                    }
                    Value::Array(items) => {
                        if let Some(items) = self.strip_elements(items) {
                            let def = self.schema.field(key, fid);
                            self.write_field(node, def, Value::Array(items));
                        }
                    }
                    Value::List(items) => {
                        if let Some(items) = self.strip_elements(items) {
                            let def = self.schema.field(key, fid);
                            self.write_field(node, def, Value::List(items));
                        }
                    }
                    Value::Node(child) => {
                        if self.is_included(child.type_id()) {
                            self.strip_node_timezones(&child);
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    /// Recurse into node elements and clear stamps held directly in the
    /// collection. Returns the elements when a stamp was rewritten and the
    /// collection needs writing back.
    fn strip_elements(&self, mut items: Vec<Value>) -> Option<Vec<Value>> {
        let mut rewrote = false;
        for item in items.iter_mut() {
            match item {
                Value::Node(child) => {
                    if self.is_included(child.type_id()) {
                        self.strip_node_timezones(child);
                    }
                }
                Value::Temporal(stamp) => {
                    if stamp.has_timezone() {
                        stamp.clear_timezone();
                        rewrote = true;
                    }
                }
                _ => {}
            }
        }
        rewrote.then_some(items)
    }
}

#[cfg(test)]
#[path = "../tests/temporal_tests.rs"]
mod tests;

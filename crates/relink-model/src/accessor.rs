//! Generic field access over an opaque node instance.
//!
//! The resolver never touches node storage directly; it goes through a
//! `FieldAccessor`, mirroring the reflective get/set boundary of the source
//! format. The default `MapAccessor` reads the node's field map; an
//! embedding can substitute its own implementation (for example one backed
//! by generated per-type accessors).

use thiserror::Error;

use crate::schema::FieldDef;
use crate::value::{NodeRef, Value};

/// Field access failure. Callers log these and skip the field; a failed
/// access never aborts a pass.
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("field '{field}' is not readable on {type_name}")]
    Unreadable { type_name: String, field: String },
    #[error("field '{field}' is not writable on {type_name}")]
    Unwritable { type_name: String, field: String },
}

/// Capability for reading and writing a declared field on a node.
pub trait FieldAccessor {
    /// Read the field's current value; `Ok(None)` when the field is unset.
    fn get(&self, node: &NodeRef, field: &FieldDef) -> Result<Option<Value>, AccessError>;

    /// Overwrite the field's value.
    fn set(&self, node: &NodeRef, field: &FieldDef, value: Value) -> Result<(), AccessError>;
}

/// Default accessor backed by the node's own field map. Unset fields read
/// as `None`; writes always succeed.
#[derive(Debug, Default)]
pub struct MapAccessor;

impl FieldAccessor for MapAccessor {
    fn get(&self, node: &NodeRef, field: &FieldDef) -> Result<Option<Value>, AccessError> {
        Ok(node.get(&field.name).filter(|v| !v.is_null()))
    }

    fn set(&self, node: &NodeRef, field: &FieldDef, value: Value) -> Result<(), AccessError> {
        node.set(&field.name, value);
        Ok(())
    }
}

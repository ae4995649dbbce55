//! Data model for the relink graph resolver.
//!
//! This crate provides the boundary types the resolver operates on:
//! - Schema metadata (`Schema`, `TypeDef`, `FieldDef`) describing the types
//!   of a deserialized document graph
//! - The dynamic runtime representation (`Value`, `Node`, `NodeRef`)
//! - The `FieldAccessor` capability for generic field get/set
//! - The `TypeFilter` predicate restricting traversal to application types
//! - `Stamp`, a date/time value with an optional timezone designator
//!
//! The graph itself is produced elsewhere (by deserializing a hierarchical
//! document); this crate only models it so the resolver can restore
//! relationships the deserializer could not express.

pub mod accessor;
pub mod filter;
pub mod schema;
pub mod stamp;
pub mod value;

pub use accessor::{AccessError, FieldAccessor, MapAccessor};
pub use filter::{NamespaceFilter, TypeFilter};
pub use schema::{FieldDef, FieldId, FieldShape, FieldTags, FieldType, Schema, TypeDef, TypeId};
pub use stamp::Stamp;
pub use value::{Node, NodeRef, Value};

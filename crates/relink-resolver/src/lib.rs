//! Post-deserialization fix-up of tree-shaped document graphs.
//!
//! A deserializer for a hierarchical document format cannot express
//! cross-references: it hands back a tree where reference fields still hold
//! the identifier text they carried on the wire. This crate restores what
//! the wire form flattened, in three independent passes over the same graph:
//!
//! - **Reference linking**: identifier-reference text is resolved against an
//!   identifier table built from the same graph, and the field is rewritten
//!   to hold the referenced node(s) directly.
//! - **Timezone stripping**: temporal fields lose their timezone designator
//!   in place, without converting the represented instant.
//! - **Identifier prefixing**: a caller-supplied prefix is added to or
//!   stripped from every identifier, for merging graphs sourced from
//!   different parties without identifier collisions.
//!
//! The passes are driven by a per-type schema compilation step that records,
//! once per concrete type, exactly which fields carry which role — so the
//! passes inspect only the fields that matter instead of re-scanning type
//! metadata on every visit. Compilation is cycle-safe: self-referencing
//! types (and indirect type cycles) compile in bounded time.
//!
//! Everything is single-threaded and synchronous. Type-level caches are
//! populated once and then read by every subsequent graph; the identifier
//! table is rebuilt per `resolve` call.

mod compile;
pub mod config;
mod id_table;
mod linker;
mod prefix;
mod registry;
pub mod resolver;
pub mod role;
mod temporal;
mod walk;

pub use config::ResolverConfig;
pub use registry::SchemaRegistry;
pub use resolver::Resolver;
pub use role::{FieldRole, RoleSummary};

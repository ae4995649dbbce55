//! Compiled per-type field registries.
//!
//! `SchemaRegistry` is the explicit cache object behind compilation: for
//! each role, a map from concrete type to the set of its own fields that
//! carry that role (directly, or because something reachable through them
//! does), plus the compiled-types map guarding recompilation and breaking
//! type-graph cycles.
//!
//! Lifecycle: populated during compilation, read by every pass afterwards.
//! Single writer, then many readers; no internal synchronization.

use indexmap::IndexSet;
use rustc_hash::FxHashMap;

use relink_model::{FieldId, TypeId};

use crate::role::{FieldRole, RoleSummary};

/// Compilation state of a type in the compiled-types map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompileState {
    /// Currently on the compilation stack; hitting this means a type cycle.
    InProgress,
    /// Compiled; `None` when nothing role-bearing is reachable.
    Done(Option<RoleSummary>),
}

/// Per-type field registries plus the compiled-types memo.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    identifiers: FxHashMap<TypeId, IndexSet<FieldId>>,
    references: FxHashMap<TypeId, IndexSet<FieldId>>,
    temporals: FxHashMap<TypeId, IndexSet<FieldId>>,
    /// Compound fields with filter-included element types, regardless of
    /// role. The prefix pass descends through these so it reaches
    /// identifiers nested under fields no other pass cares about.
    descent: FxHashMap<TypeId, IndexSet<FieldId>>,
    compiled: FxHashMap<TypeId, CompileState>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field of `owner` under a single role.
    pub(crate) fn register(&mut self, role: FieldRole, owner: TypeId, field: FieldId) {
        let map = match role {
            FieldRole::Identifier => &mut self.identifiers,
            FieldRole::Reference => &mut self.references,
            FieldRole::Temporal => &mut self.temporals,
            FieldRole::None => return,
        };
        map.entry(owner).or_default().insert(field);
    }

    /// Register a compound field under every role its element type's
    /// summary reports, so the passes descend through it.
    pub(crate) fn register_summary(&mut self, owner: TypeId, field: FieldId, summary: RoleSummary) {
        if summary.has_identifier {
            self.identifiers.entry(owner).or_default().insert(field);
        }
        if summary.has_reference {
            self.references.entry(owner).or_default().insert(field);
        }
        if summary.has_temporal {
            self.temporals.entry(owner).or_default().insert(field);
        }
    }

    pub(crate) fn register_descent(&mut self, owner: TypeId, field: FieldId) {
        self.descent.entry(owner).or_default().insert(field);
    }

    /// Fields of `owner` registered under `role`, in registration order.
    pub(crate) fn fields(&self, role: FieldRole, owner: TypeId) -> Option<&IndexSet<FieldId>> {
        let map = match role {
            FieldRole::Identifier => &self.identifiers,
            FieldRole::Reference => &self.references,
            FieldRole::Temporal => &self.temporals,
            FieldRole::None => return None,
        };
        map.get(&owner)
    }

    pub(crate) fn descent_fields(&self, owner: TypeId) -> Option<&IndexSet<FieldId>> {
        self.descent.get(&owner)
    }

    pub(crate) fn state(&self, ty: TypeId) -> Option<CompileState> {
        self.compiled.get(&ty).copied()
    }

    pub(crate) fn mark_in_progress(&mut self, ty: TypeId) {
        self.compiled.insert(ty, CompileState::InProgress);
    }

    pub(crate) fn mark_done(&mut self, ty: TypeId, summary: Option<RoleSummary>) {
        self.compiled.insert(ty, CompileState::Done(summary));
    }

    /// Whether `ty` has completed compilation (with or without a summary).
    pub fn is_compiled(&self, ty: TypeId) -> bool {
        matches!(self.compiled.get(&ty), Some(CompileState::Done(_)))
    }
}

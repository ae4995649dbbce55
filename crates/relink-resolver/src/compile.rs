//! The schema compiler: one pass per concrete type that records which
//! fields carry which role, directly or through their element types.
//!
//! Compilation walks a type's own declared fields plus, along the supertype
//! chain, its inherited ones. Role-bearing fields go straight into the
//! matching registry. Compound fields with filter-included element types
//! are compiled recursively (memoized), and then registered under every
//! role their element type's summary reports — so a field of a compound
//! type is itself "role-bearing" at this level whenever anything underneath
//! it needs processing.
//!
//! Type cycles cannot recurse: a field whose element type is already on the
//! compilation stack is deferred, and registered after the outermost
//! compile completes using the element type's final summary. This covers
//! direct self-reference exactly; for indirect cycles the deferring edge's
//! contribution is folded back into the owner's stored summary when the
//! deferral is flushed.

use relink_model::{FieldId, FieldType, TypeId};

use crate::registry::CompileState;
use crate::resolver::Resolver;
use crate::role::{FieldRole, RoleSummary};

/// A compound-field registration postponed because its element type was
/// still being compiled.
struct DeferredEdge {
    owner: TypeId,
    field: FieldId,
    target: TypeId,
}

impl Resolver {
    /// Compile `ty`, idempotently. Returns the type's role summary, or
    /// `None` when nothing role-bearing is reachable from it. A type with
    /// no relevant fields is still marked compiled to avoid rework.
    pub fn compile(&mut self, ty: TypeId) -> Option<RoleSummary> {
        let mut deferred = Vec::new();
        self.compile_inner(ty, &mut deferred);
        for edge in deferred {
            let Some(CompileState::Done(Some(target_summary))) = self.registry.state(edge.target)
            else {
                continue;
            };
            self.registry
                .register_summary(edge.owner, edge.field, target_summary);
            if let Some(CompileState::Done(owner_summary)) = self.registry.state(edge.owner) {
                let merged = owner_summary.map_or(target_summary, |s| s.merge(target_summary));
                self.registry.mark_done(edge.owner, Some(merged));
            }
        }
        match self.registry.state(ty) {
            Some(CompileState::Done(summary)) => summary,
            _ => None,
        }
    }

    fn compile_inner(
        &mut self,
        ty: TypeId,
        deferred: &mut Vec<DeferredEdge>,
    ) -> Option<RoleSummary> {
        match self.registry.state(ty) {
            Some(CompileState::Done(summary)) => return summary,
            Some(CompileState::InProgress) => return None,
            None => {}
        }
        self.registry.mark_in_progress(ty);

        let mut summary: Option<RoleSummary> = None;
        let mut chain = Some(ty);
        while let Some(key) = chain {
            for index in 0..self.schema.field_count(key) {
                let fid = FieldId(index as u32);
                if self.schema.is_enum_field(self.schema.field(key, fid)) {
                    continue;
                }
                let role = FieldRole::of(self.schema.field(key, fid), self.config.strip_timezones);
                if role != FieldRole::None {
                    self.registry.register(role, key, fid);
                    summary = Some(
                        summary
                            .unwrap_or_default()
                            .merge(RoleSummary::for_role(role)),
                    );
                    continue;
                }
                let FieldType::Node(elem_ty) = self.schema.field(key, fid).element_type() else {
                    continue;
                };
                if !self.is_included(elem_ty) {
                    continue;
                }
                self.registry.register_descent(key, fid);
                match self.registry.state(elem_ty) {
                    Some(CompileState::InProgress) => {
                        deferred.push(DeferredEdge {
                            owner: key,
                            field: fid,
                            target: elem_ty,
                        });
                    }
                    _ => {
                        if let Some(child) = self.compile_inner(elem_ty, deferred) {
                            self.registry.register_summary(key, fid, child);
                            summary = Some(summary.unwrap_or_default().merge(child));
                        }
                    }
                }
            }
            chain = self
                .schema
                .type_def(key)
                .supertype
                .filter(|sup| self.is_included(*sup));
        }

        self.registry.mark_done(ty, summary);
        summary
    }
}

#[cfg(test)]
#[path = "../tests/compile_tests.rs"]
mod tests;

//! Field roles and per-type role summaries.

use relink_model::{FieldDef, FieldTags, FieldType};

/// The primary role a field plays during resolution. A field has exactly
/// one role, determined by its declared type and tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// Textual lookup key for reference resolution.
    Identifier,
    /// Identifier token(s) to be resolved to node(s).
    Reference,
    /// Date/time-with-timezone value subject to timezone stripping.
    Temporal,
    None,
}

impl FieldRole {
    /// Classify a field. Temporal classification only applies while
    /// timezone stripping is enabled, so role assignment is mode-dependent:
    /// with stripping disabled a temporal-typed field has no role at all.
    /// Reference tags win over the identifier tag, matching the order the
    /// annotation layer is consulted in.
    pub fn of(field: &FieldDef, strip_timezones: bool) -> FieldRole {
        if strip_timezones && field.ty == FieldType::Temporal {
            return FieldRole::Temporal;
        }
        if field.tags.intersects(FieldTags::IDREF | FieldTags::MULTI_REF) {
            return FieldRole::Reference;
        }
        if field.tags.contains(FieldTags::ID) {
            return FieldRole::Identifier;
        }
        FieldRole::None
    }
}

/// Per-type role presence: whether the type, or anything reachable through
/// it inside the filter, contains at least one field of each role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleSummary {
    pub has_identifier: bool,
    pub has_reference: bool,
    pub has_temporal: bool,
}

impl RoleSummary {
    pub fn for_role(role: FieldRole) -> RoleSummary {
        let mut summary = RoleSummary::default();
        match role {
            FieldRole::Identifier => summary.has_identifier = true,
            FieldRole::Reference => summary.has_reference = true,
            FieldRole::Temporal => summary.has_temporal = true,
            FieldRole::None => {}
        }
        summary
    }

    /// Logical-OR merge of a nested type's summary into this one.
    pub fn merge(self, other: RoleSummary) -> RoleSummary {
        RoleSummary {
            has_identifier: self.has_identifier || other.has_identifier,
            has_reference: self.has_reference || other.has_reference,
            has_temporal: self.has_temporal || other.has_temporal,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.has_identifier || self.has_reference || self.has_temporal)
    }
}

#[cfg(test)]
#[path = "../tests/role_tests.rs"]
mod tests;

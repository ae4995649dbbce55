//! The type filter: which types belong to the application and should be
//! traversed, versus library/primitive/enum types that terminate recursion.

use crate::schema::{Schema, TypeId};

/// Predicate restricting compilation and traversal to application-owned
/// types. Supplied by the embedding format layer.
pub trait TypeFilter {
    fn contains(&self, schema: &Schema, ty: TypeId) -> bool;
}

/// Filter matching types whose fully-qualified name starts with one of a
/// fixed set of namespace prefixes.
#[derive(Debug, Clone)]
pub struct NamespaceFilter {
    prefixes: Vec<String>,
}

impl NamespaceFilter {
    pub fn new(prefixes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }
}

impl TypeFilter for NamespaceFilter {
    fn contains(&self, schema: &Schema, ty: TypeId) -> bool {
        let name = &schema.type_def(ty).name;
        self.prefixes.iter().any(|prefix| name.starts_with(prefix))
    }
}

#[cfg(test)]
#[path = "../tests/filter_tests.rs"]
mod tests;

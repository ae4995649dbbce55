//! Schema metadata: interned type identities, per-type field declarations,
//! and the arena they live in.
//!
//! A `Schema` is the field-metadata provider for the resolver. It answers
//! the questions the original document format's annotation layer would:
//! which fields a type declares, what shape and element type each field has,
//! and which identifier/reference tags it carries.

use bitflags::bitflags;
use rustc_hash::FxHashMap;

/// Interned identity of a concrete type; index into the [`Schema`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

/// Index of a field within its declaring [`TypeDef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub u32);

bitflags! {
    /// Tags attached to a field by the source format's annotation layer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FieldTags: u8 {
        /// The field's textual value is a lookup key for reference resolution.
        const ID = 1 << 0;
        /// The field holds identifier token(s) to be resolved to object(s).
        const IDREF = 1 << 1;
        /// The field is explicitly tagged as holding multiple references.
        const MULTI_REF = 1 << 2;
    }
}

/// Declared shape of a field: a single value, a homogeneous array, or an
/// ordered sequence. Arrays and sequences are kept distinct so a rewritten
/// collection can be written back in the field's original shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    Scalar,
    Array,
    List,
}

/// Declared element type of a field (the array component type, the sequence
/// element type, or the scalar type itself).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Int,
    Float,
    Bool,
    /// A date/time value with an optional timezone designator.
    Temporal,
    /// A schema-declared compound type.
    Node(TypeId),
}

/// A field declaration: name, shape, element type, and annotation tags.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: String,
    pub shape: FieldShape,
    pub ty: FieldType,
    pub tags: FieldTags,
}

impl FieldDef {
    pub fn scalar(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            shape: FieldShape::Scalar,
            ty,
            tags: FieldTags::empty(),
        }
    }

    pub fn array(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            shape: FieldShape::Array,
            ty,
            tags: FieldTags::empty(),
        }
    }

    pub fn list(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            shape: FieldShape::List,
            ty,
            tags: FieldTags::empty(),
        }
    }

    pub fn tagged(mut self, tags: FieldTags) -> Self {
        self.tags = tags;
        self
    }

    /// The element type recursion and role classification operate on:
    /// the array component type, the sequence element type, or the field's
    /// own type for scalars. Shapes only differ in how values are iterated.
    pub fn element_type(&self) -> FieldType {
        self.ty
    }
}

/// A concrete type declaration: fully-qualified name, optional supertype,
/// and the fields it declares itself (inherited fields are reached through
/// the supertype chain, not copied down).
#[derive(Debug, Clone)]
pub struct TypeDef {
    pub name: String,
    pub supertype: Option<TypeId>,
    pub is_enum: bool,
    pub fields: Vec<FieldDef>,
}

impl TypeDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supertype: None,
            is_enum: false,
            fields: Vec::new(),
        }
    }

    /// Declare an enumeration type. Enum-typed fields terminate both
    /// compilation and traversal.
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supertype: None,
            is_enum: true,
            fields: Vec::new(),
        }
    }

    pub fn with_supertype(mut self, supertype: TypeId) -> Self {
        self.supertype = Some(supertype);
        self
    }

    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }
}

/// Arena of type declarations with fully-qualified-name lookup.
#[derive(Debug, Default)]
pub struct Schema {
    types: Vec<TypeDef>,
    by_name: FxHashMap<String, TypeId>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type declaration and return its interned identity.
    /// Re-defining a name replaces the lookup entry but keeps earlier
    /// `TypeId`s valid.
    pub fn define(&mut self, def: TypeDef) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.by_name.insert(def.name.clone(), id);
        self.types.push(def);
        id
    }

    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    pub fn type_def(&self, ty: TypeId) -> &TypeDef {
        &self.types[ty.0 as usize]
    }

    pub fn field(&self, ty: TypeId, field: FieldId) -> &FieldDef {
        &self.types[ty.0 as usize].fields[field.0 as usize]
    }

    pub fn field_count(&self, ty: TypeId) -> usize {
        self.types[ty.0 as usize].fields.len()
    }

    /// True when the field's declared element type is an enumeration.
    pub fn is_enum_field(&self, field: &FieldDef) -> bool {
        match field.ty {
            FieldType::Node(ty) => self.type_def(ty).is_enum,
            _ => false,
        }
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }
}

#[cfg(test)]
#[path = "../tests/schema_tests.rs"]
mod tests;

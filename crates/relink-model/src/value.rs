//! Dynamic runtime representation of a deserialized document graph.
//!
//! A graph node is an `Rc<Node>` holding an interior-mutable field map, so
//! passes can rewrite fields in place while the same node is referenced from
//! several places in the tree. The model is single-threaded by contract:
//! there is no synchronization, and concurrent mutation of one graph is
//! never safe.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::schema::TypeId;
use crate::stamp::Stamp;

/// Shared handle to a graph node.
pub type NodeRef = Rc<Node>;

/// A runtime value held by a node field.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Temporal(Stamp),
    Node(NodeRef),
    /// Homogeneous array. Kept distinct from `List` so a rewritten
    /// collection is written back in the field's original runtime shape.
    Array(Vec<Value>),
    /// Ordered sequence.
    List(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&NodeRef> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Render a primitive value as an identifier token. Structured values
    /// have no token form and return `None`.
    pub fn coerce_token(&self) -> Option<String> {
        match self {
            Value::Text(text) => Some(text.clone()),
            Value::Int(n) => Some(n.to_string()),
            Value::Float(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// A graph node: a concrete runtime type plus its field values.
#[derive(Debug)]
pub struct Node {
    type_id: TypeId,
    fields: RefCell<FxHashMap<String, Value>>,
}

impl Node {
    pub fn new(type_id: TypeId) -> NodeRef {
        Rc::new(Self {
            type_id,
            fields: RefCell::new(FxHashMap::default()),
        })
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Read a field value. Returns a clone; node-valued entries clone the
    /// shared handle, not the node.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.fields.borrow().get(name).cloned()
    }

    pub fn set(&self, name: &str, value: Value) {
        self.fields.borrow_mut().insert(name.to_string(), value);
    }

    /// Identity comparison: two handles to the same node.
    pub fn same(a: &NodeRef, b: &NodeRef) -> bool {
        Rc::ptr_eq(a, b)
    }
}

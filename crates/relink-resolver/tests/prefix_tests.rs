use super::*;
use relink_model::{
    FieldDef, FieldType, MapAccessor, NamespaceFilter, Node, Schema, TypeDef, Value,
};

use crate::config::ResolverConfig;

struct DocTypes {
    section: TypeId,
    doc: TypeId,
}

fn resolver() -> (Resolver, DocTypes) {
    let mut schema = Schema::new();
    let section = schema.define(
        TypeDef::new("com.example.doc.Section")
            .with_field(FieldDef::scalar("id", FieldType::Text).tagged(FieldTags::ID))
            .with_field(FieldDef::scalar("title", FieldType::Text)),
    );
    // Meta carries no roles at all; identifiers under it are reachable
    // only through the broader prefix recursion.
    let meta = schema.define(
        TypeDef::new("com.example.doc.Meta")
            .with_field(FieldDef::scalar("revision", FieldType::Text)),
    );
    let doc = schema.define(
        TypeDef::new("com.example.doc.Document")
            .with_field(FieldDef::scalar("id", FieldType::Text).tagged(FieldTags::ID))
            .with_field(FieldDef::list("sections", FieldType::Node(section)))
            .with_field(FieldDef::scalar("meta", FieldType::Node(meta))),
    );
    let resolver = Resolver::new(
        schema,
        Box::new(NamespaceFilter::new(["com.example."])),
        Box::new(MapAccessor),
        ResolverConfig::default(),
    );
    (resolver, DocTypes { section, doc })
}

fn document(types: &DocTypes) -> (NodeRef, NodeRef) {
    let section = Node::new(types.section);
    section.set("id", Value::Text("intro".to_string()));
    section.set("title", Value::Text("Introduction".to_string()));
    let doc = Node::new(types.doc);
    doc.set("id", Value::Text("doc-1".to_string()));
    doc.set("sections", Value::List(vec![Value::Node(section.clone())]));
    (doc, section)
}

fn id_of(node: &NodeRef) -> String {
    node.get("id").unwrap().as_text().unwrap().to_string()
}

#[test]
fn add_prefix_prepends_to_every_identifier() {
    let (mut resolver, types) = resolver();
    let (doc, section) = document(&types);

    let out = resolver.add_prefix(Some(doc.clone()), "acme").expect("graph");
    assert!(Node::same(&doc, &out));
    assert_eq!(id_of(&doc), "acme-doc-1");
    assert_eq!(id_of(&section), "acme-intro");
    // Non-identifier text is untouched.
    assert_eq!(section.get("title").unwrap().as_text(), Some("Introduction"));
}

#[test]
fn strip_after_add_round_trips() {
    let (mut resolver, types) = resolver();
    let (doc, section) = document(&types);

    resolver.add_prefix(Some(doc.clone()), "acme");
    resolver.strip_prefix(Some(doc.clone()), "acme");

    assert_eq!(id_of(&doc), "doc-1");
    assert_eq!(id_of(&section), "intro");
}

#[test]
fn strip_removes_the_prefix_token_anywhere_in_the_text() {
    let (mut resolver, types) = resolver();
    let (doc, _) = document(&types);
    // Strip is an unanchored substring removal: a mid-string occurrence of
    // the prefix token goes too.
    doc.set("id", Value::Text("left-acme-right".to_string()));

    resolver.strip_prefix(Some(doc.clone()), "acme");
    assert_eq!(id_of(&doc), "left-right");
}

#[test]
fn prefix_passes_tolerate_none() {
    let (mut resolver, _) = resolver();
    assert!(resolver.add_prefix(None, "acme").is_none());
    assert!(resolver.strip_prefix(None, "acme").is_none());
}

#[test]
fn prefix_reaches_identifiers_under_role_free_fields() {
    // Meta's declared shape carries no roles, so no role registry ever
    // descends through the `meta` field; the prefix pass still must, since
    // a runtime subtype of Meta can hold identifiers.
    let mut schema = Schema::new();
    let meta = schema.define(TypeDef::new("com.example.doc.Meta"));
    let tagged_meta = schema.define(
        TypeDef::new("com.example.doc.TaggedMeta")
            .with_supertype(meta)
            .with_field(FieldDef::scalar("id", FieldType::Text).tagged(FieldTags::ID)),
    );
    let doc = schema.define(
        TypeDef::new("com.example.doc.Document")
            .with_field(FieldDef::scalar("id", FieldType::Text).tagged(FieldTags::ID))
            .with_field(FieldDef::scalar("meta", FieldType::Node(meta))),
    );
    let mut resolver = Resolver::new(
        schema,
        Box::new(NamespaceFilter::new(["com.example."])),
        Box::new(MapAccessor),
        ResolverConfig {
            fix_references: false,
            strip_timezones: false,
            compile_types: vec!["com.example.doc.TaggedMeta".to_string()],
        },
    );
    resolver.initialize();

    let meta_node = Node::new(tagged_meta);
    meta_node.set("id", Value::Text("m1".to_string()));
    let doc_node = Node::new(doc);
    doc_node.set("id", Value::Text("d1".to_string()));
    doc_node.set("meta", Value::Node(meta_node.clone()));

    resolver.add_prefix(Some(doc_node.clone()), "acme");

    assert_eq!(id_of(&doc_node), "acme-d1");
    assert_eq!(id_of(&meta_node), "acme-m1");
}

use super::*;
use crate::schema::{Schema, TypeDef};

#[test]
fn namespace_filter_matches_by_prefix() {
    let mut schema = Schema::new();
    let owned = schema.define(TypeDef::new("com.example.trade.Order"));
    let foreign = schema.define(TypeDef::new("lib.runtime.Calendar"));

    let filter = NamespaceFilter::new(["com.example."]);
    assert!(filter.contains(&schema, owned));
    assert!(!filter.contains(&schema, foreign));
}

#[test]
fn namespace_filter_accepts_multiple_prefixes() {
    let mut schema = Schema::new();
    let a = schema.define(TypeDef::new("com.example.a.Widget"));
    let b = schema.define(TypeDef::new("org.partner.b.Widget"));
    let c = schema.define(TypeDef::new("net.other.Widget"));

    let filter = NamespaceFilter::new(["com.example.", "org.partner."]);
    assert!(filter.contains(&schema, a));
    assert!(filter.contains(&schema, b));
    assert!(!filter.contains(&schema, c));
}

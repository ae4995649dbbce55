use super::*;
use relink_model::{FieldDef, FieldTags, FieldType, MapAccessor, NamespaceFilter, Schema, TypeDef};

use crate::resolver::Resolver;

#[test]
fn defaults_leave_everything_off() {
    let config = ResolverConfig::default();
    assert!(!config.fix_references);
    assert!(!config.strip_timezones);
    assert!(config.compile_types.is_empty());
}

#[test]
fn deserializes_with_missing_fields_defaulted() {
    let config: ResolverConfig = serde_json::from_str(r#"{ "fix_references": true }"#).unwrap();
    assert!(config.fix_references);
    assert!(!config.strip_timezones);
    assert!(config.compile_types.is_empty());
}

#[test]
fn deserializes_the_full_shape() {
    let config: ResolverConfig = serde_json::from_str(
        r#"{
            "fix_references": true,
            "strip_timezones": true,
            "compile_types": ["com.example.trade.Portfolio"]
        }"#,
    )
    .unwrap();
    assert!(config.fix_references);
    assert!(config.strip_timezones);
    assert_eq!(config.compile_types, ["com.example.trade.Portfolio"]);
}

#[test]
fn initialize_skips_unknown_type_names() {
    let mut schema = Schema::new();
    let order = schema.define(
        TypeDef::new("com.example.trade.Order")
            .with_field(FieldDef::scalar("id", FieldType::Text).tagged(FieldTags::ID)),
    );
    let mut resolver = Resolver::new(
        schema,
        Box::new(NamespaceFilter::new(["com.example."])),
        Box::new(MapAccessor),
        ResolverConfig {
            fix_references: true,
            strip_timezones: false,
            compile_types: vec![
                "com.example.trade.Order".to_string(),
                "com.example.trade.DoesNotExist".to_string(),
            ],
        },
    );

    // The unknown name is logged and skipped; the known one compiles.
    resolver.initialize();
    assert!(resolver.registry().is_compiled(order));
}

//! Snapshot tests for Rust generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use bear_codegen::LanguageConfig;
use bear_codegen_rust::RustConfig;
use bear_core::{NamingConventionType, Property, PropertyType, PropertyValue};

fn prop(name: &str, ty: PropertyType, value: PropertyValue) -> Property {
    Property::new(name, ty, value).expect("invalid property")
}

fn generate(type_name: &str, properties: &[Property]) -> String {
    RustConfig
        .emission(type_name, properties)
        .run()
        .expect("generation failed")
}

#[test]
fn test_settings_module() {
    let properties = vec![
        prop("maxRetries", PropertyType::Int, PropertyValue::Int(3)),
        prop("enabled", PropertyType::Bool, PropertyValue::Bool(true)),
    ];

    insta::assert_snapshot!(generate("Settings", &properties), @r"
    // Generated by bear. Do not edit manually.

    pub struct Settings;

    impl Settings {
        pub const MAX_RETRIES: i64 = 3;
        pub const ENABLED: bool = true;
    }
    ");
}

#[test]
fn test_all_types_module() {
    let properties = vec![
        prop("myFloat", PropertyType::Float, PropertyValue::Int(322)),
        prop("myDouble", PropertyType::Double, PropertyValue::Float(233.9)),
        prop(
            "myRegex",
            PropertyType::Regex,
            PropertyValue::String(r"^\d+$".into()),
        )
        .with_comment("Digits only."),
        prop(
            "myString",
            PropertyType::String,
            PropertyValue::String("Hello World".into()),
        ),
    ];

    insta::assert_snapshot!(generate("test_config", &properties), @r#"
    // Generated by bear. Do not edit manually.

    pub struct TestConfig;

    impl TestConfig {
        pub const MY_FLOAT: f32 = 322.0;
        pub const MY_DOUBLE: f64 = 233.9;
        /// Digits only.
        pub const MY_REGEX: &'static str = "^\\d+$";
        pub const MY_STRING: &'static str = "Hello World";
    }
    "#);
}

#[test]
fn test_reserved_names_use_raw_identifiers() {
    let properties = vec![prop("type", PropertyType::Int, PropertyValue::Int(1))];

    let out = RustConfig
        .emission("Reserved", &properties)
        .with_property_naming(Some(NamingConventionType::SnakeCase))
        .run()
        .unwrap();

    assert!(out.contains("    pub const r#type: i64 = 1;\n"));
}

#[test]
fn test_empty_impl() {
    let out = generate("Empty", &[]);
    assert!(out.ends_with("pub struct Empty;\n\nimpl Empty {\n}\n"));
}

fn assert_invalid_name(result: bear_codegen::Result<String>, expected: &str) {
    match result {
        Err(bear_codegen::Error::InvalidName { name, .. }) => assert_eq!(name, expected),
        other => panic!("expected InvalidName for '{}', got {:?}", expected, other),
    }
}

#[test]
fn test_names_that_are_not_identifiers_are_rejected() {
    let kebab = vec![
        prop("maxRetries", PropertyType::Int, PropertyValue::Int(3))
            .with_naming(bear_core::NamingConventionType::KebabCase),
    ];
    assert_invalid_name(RustConfig.emission("Settings", &kebab).run(), "maxRetries");

    let leading_digit = vec![prop("_1value", PropertyType::Int, PropertyValue::Int(3))];
    assert_invalid_name(RustConfig.emission("Settings", &leading_digit).run(), "_1value");

    assert_invalid_name(RustConfig.emission("2024_settings", &[]).run(), "2024_settings");
}

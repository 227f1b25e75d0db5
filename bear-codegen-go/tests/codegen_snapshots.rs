//! Output tests for Go generation.
//!
//! Go output is tab indented, so expectations are spelled out with explicit
//! `\t` rather than inline snapshots.

use bear_codegen::{LanguageConfig, testing::assert_content_eq};
use bear_codegen_go::GoConfig;
use bear_core::{Property, PropertyType, PropertyValue};

fn prop(name: &str, ty: PropertyType, value: PropertyValue) -> Property {
    Property::new(name, ty, value).expect("invalid property")
}

fn generate(type_name: &str, properties: &[Property]) -> String {
    GoConfig
        .emission(type_name, properties)
        .run()
        .expect("generation failed")
}

#[test]
fn test_settings_var() {
    let properties = vec![
        prop("maxRetries", PropertyType::Int, PropertyValue::Int(3)),
        prop("enabled", PropertyType::Bool, PropertyValue::Bool(true)),
    ];

    assert_content_eq(
        "// Code generated by bear. DO NOT EDIT.\n\
         \n\
         package settings\n\
         \n\
         var Settings = struct {\n\
         \tMaxRetries int64\n\
         \tEnabled bool\n\
         }{\n\
         \tMaxRetries: 3,\n\
         \tEnabled: true,\n\
         }\n",
        &generate("Settings", &properties),
    );
}

#[test]
fn test_regex_imports_regexp() {
    let properties = vec![
        prop(
            "myRegex",
            PropertyType::Regex,
            PropertyValue::String(r"Test Reg(E|e)x\d".into()),
        )
        .with_comment("Just another RegEx."),
        prop("myDouble", PropertyType::Double, PropertyValue::Float(233.9)),
        prop(
            "myString",
            PropertyType::String,
            PropertyValue::String("Hello World".into()),
        ),
    ];

    assert_content_eq(
        "// Code generated by bear. DO NOT EDIT.\n\
         \n\
         package testconfig\n\
         \n\
         import \"regexp\"\n\
         \n\
         var TestConfig = struct {\n\
         \t// Just another RegEx.\n\
         \tMyRegex *regexp.Regexp\n\
         \tMyDouble float64\n\
         \tMyString string\n\
         }{\n\
         \tMyRegex: regexp.MustCompile(`Test Reg(E|e)x\\d`),\n\
         \tMyDouble: 233.9,\n\
         \tMyString: \"Hello World\",\n\
         }\n",
        &generate("test_config", &properties),
    );
}

#[test]
fn test_no_import_without_regex() {
    let properties = vec![prop("count", PropertyType::Int, PropertyValue::Int(1))];

    assert!(!generate("Counts", &properties).contains("import"));
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
    assert_invalid_name(GoConfig.emission("Settings", &kebab).run(), "maxRetries");

    let leading_digit = vec![prop("_1value", PropertyType::Int, PropertyValue::Int(3))];
    assert_invalid_name(GoConfig.emission("Settings", &leading_digit).run(), "_1value");

    assert_invalid_name(GoConfig.emission("2024_settings", &[]).run(), "2024_settings");
}

#[test]
fn test_keyword_type_name_gives_valid_package() {
    let properties = vec![prop("size", PropertyType::Int, PropertyValue::Int(1))];

    assert_content_eq(
        "// Code generated by bear. DO NOT EDIT.\n\
         \n\
         package map_\n\
         \n\
         var Map = struct {\n\
         \tSize int64\n\
         }{\n\
         \tSize: 1,\n\
         }\n",
        &generate("map", &properties),
    );
}

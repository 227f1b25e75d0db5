//! Test utilities for language plugins.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use bear_core::{LanguageType, NamingConventionType, PropertyType};

use crate::{
    Generator, Indent, LanguageConfig, NamingConvention, TypeMapper,
    emission::{Field, TypeContext},
    escape_with_suffix,
};

const TEST_NAMING: NamingConvention = NamingConvention {
    type_case: NamingConventionType::PascalCase,
    property_case: NamingConventionType::SnakeCase,
    file_case: NamingConventionType::SnakeCase,
    reserved_words: &["type", "end"],
    escape_reserved: escape_with_suffix,
};

/// A minimal plain-text language.
///
/// Reports itself as [`LanguageType::C`] with the `h` extension and the
/// `^\w+$` file name pattern, but the supported types and the default
/// property convention are configurable.
#[derive(Debug, Clone)]
pub struct TestLanguage {
    supported: Vec<PropertyType>,
    property_case: NamingConventionType,
}

impl TestLanguage {
    /// Supports every property type.
    pub fn new() -> Self {
        Self::supporting(&PropertyType::ALL)
    }

    /// Supports only the given property types.
    pub fn supporting(types: &[PropertyType]) -> Self {
        Self {
            supported: types.to_vec(),
            property_case: TEST_NAMING.property_case,
        }
    }

    pub fn with_property_case(mut self, case: NamingConventionType) -> Self {
        self.property_case = case;
        self
    }
}

impl Default for TestLanguage {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageConfig for TestLanguage {
    fn language_type(&self) -> LanguageType {
        LanguageType::C
    }

    fn file_extension(&self) -> &'static str {
        "h"
    }

    fn generator(&self) -> Box<dyn Generator> {
        Box::new(TestGenerator {
            naming: NamingConvention {
                property_case: self.property_case,
                ..TEST_NAMING
            },
            mapper: TestTypeMapper {
                supported: self.supported.clone(),
            },
        })
    }

    fn allowed_file_name_pattern(&self) -> &'static str {
        r"^\w+$"
    }
}

/// Type mapper that uses the config-file type names as tokens.
#[derive(Debug, Clone)]
pub struct TestTypeMapper {
    supported: Vec<PropertyType>,
}

impl TypeMapper for TestTypeMapper {
    fn language(&self) -> LanguageType {
        LanguageType::C
    }

    fn map_property_type(&self, ty: PropertyType) -> Option<&'static str> {
        self.supported.contains(&ty).then(|| ty.as_str())
    }
}

/// Generator producing a readable outline of the emission.
///
/// ```text
/// // begin
/// type Settings {
///   # comment
///   max_retries: int = 3
/// }
/// // end
/// ```
#[derive(Debug, Clone)]
pub struct TestGenerator {
    naming: NamingConvention,
    mapper: TestTypeMapper,
}

impl Generator for TestGenerator {
    fn naming(&self) -> &NamingConvention {
        &self.naming
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &self.mapper
    }

    fn before_type(&self, _ctx: &TypeContext<'_>) -> String {
        "// begin\n".to_string()
    }

    fn start_type(&self, type_name: &str) -> String {
        format!("type {} {{\n", type_name)
    }

    fn property_before_type(&self, _field: &Field<'_>) -> String {
        String::new()
    }

    fn property_comment(&self, comment: &str) -> String {
        Indent::TWO.comment("#", comment)
    }

    fn property_in_type(&self, field: &Field<'_>) -> String {
        format!(
            "{}{}: {} = {}\n",
            Indent::TWO.as_str(),
            field.name(),
            field.type_token(),
            field.value()
        )
    }

    fn property_after_type(&self, _field: &Field<'_>) -> String {
        String::new()
    }

    fn end_type(&self, _ctx: &TypeContext<'_>) -> String {
        "}\n".to_string()
    }

    fn after_type(&self, _ctx: &TypeContext<'_>) -> String {
        "// end\n".to_string()
    }
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

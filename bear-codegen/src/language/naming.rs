//! Naming conventions for target languages.

use bear_core::{NamingConventionType, convert, validate_identifier};

/// Language-specific naming conventions.
///
/// Defines how type names, property names and file names are formed, and
/// how reserved words are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Convention for the container name (e.g., "test_config" -> "TestConfig")
    pub type_case: NamingConventionType,
    /// Default convention for property identifiers
    pub property_case: NamingConventionType,
    /// Convention for output file base names
    pub file_case: NamingConventionType,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "r#type" in Rust)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> bear_core::Result<String> {
        let transformed = convert(name, None, self.type_case)?;
        check_identifier(name, &transformed)?;
        Ok(self.safe_name(&transformed))
    }

    /// Transform and make safe for use as a property name.
    ///
    /// `case` is the convention in effect for this property, which may
    /// differ from [`NamingConvention::property_case`] when overridden.
    pub fn property_name(
        &self,
        name: &str,
        case: NamingConventionType,
    ) -> bear_core::Result<String> {
        let transformed = convert(name, None, case)?;
        check_identifier(name, &transformed)?;
        Ok(self.safe_name(&transformed))
    }

    /// Transform for use as a file base name.
    pub fn file_name(&self, name: &str) -> bear_core::Result<String> {
        // File names don't need escaping
        convert(name, None, self.file_case)
    }
}

/// Reject converted names that are not identifiers in any target language.
///
/// Conversion can produce these from valid input: a kebab-case override
/// introduces `-`, and dropping a leading `_` can expose a digit
/// (`_1value` -> `1value`).
fn check_identifier(name: &str, converted: &str) -> bear_core::Result<()> {
    match validate_identifier(converted) {
        None => Ok(()),
        Some(reason) => Err(bear_core::Error::invalid_name(
            name,
            format!("converts to '{}', which is not an identifier: {}", converted, reason),
        )),
    }
}

/// Escape by appending an underscore (e.g., "class" -> "class_").
pub fn escape_with_suffix(name: &str) -> String {
    format!("{}_", name)
}

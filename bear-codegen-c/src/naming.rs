//! C-specific naming conventions.

use bear_codegen::{NamingConvention, escape_with_suffix};
use bear_core::NamingConventionType;

/// C naming conventions.
pub const C_NAMING: NamingConvention = NamingConvention {
    type_case: NamingConventionType::PascalCase,
    property_case: NamingConventionType::SnakeCase,
    file_case: NamingConventionType::SnakeCase,
    reserved_words: &[
        "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
        "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
        "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch",
        "typedef", "union", "unsigned", "void", "volatile", "while", "bool", "true", "false",
        "_Bool", "_Complex", "_Imaginary",
    ],
    escape_reserved: escape_with_suffix,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_naming() {
        assert_eq!(C_NAMING.type_name("test_config").unwrap(), "TestConfig");
        assert_eq!(C_NAMING.file_name("TestConfig").unwrap(), "test_config");
        assert_eq!(
            C_NAMING
                .property_name("maxRetries", C_NAMING.property_case)
                .unwrap(),
            "max_retries"
        );
    }

    #[test]
    fn test_c_reserved_words() {
        assert!(C_NAMING.is_reserved("struct"));
        assert!(!C_NAMING.is_reserved("settings"));
        assert_eq!(C_NAMING.safe_name("int"), "int_");
    }
}

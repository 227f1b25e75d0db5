//! Go-specific naming conventions.

use bear_codegen::{NamingConvention, escape_with_suffix};
use bear_core::NamingConventionType;

/// Go naming conventions.
///
/// Properties are PascalCase so that they are exported.
pub const GO_NAMING: NamingConvention = NamingConvention {
    type_case: NamingConventionType::PascalCase,
    property_case: NamingConventionType::PascalCase,
    file_case: NamingConventionType::SnakeCase,
    reserved_words: &[
        "break",
        "case",
        "chan",
        "const",
        "continue",
        "default",
        "defer",
        "else",
        "fallthrough",
        "for",
        "func",
        "go",
        "goto",
        "if",
        "import",
        "interface",
        "map",
        "package",
        "range",
        "return",
        "select",
        "struct",
        "switch",
        "type",
        "var",
    ],
    escape_reserved: escape_with_suffix,
};

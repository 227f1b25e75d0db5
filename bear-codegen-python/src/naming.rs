//! Python-specific naming conventions.

use bear_codegen::{NamingConvention, escape_with_suffix};
use bear_core::NamingConventionType;

/// Python naming conventions.
pub const PYTHON_NAMING: NamingConvention = NamingConvention {
    type_case: NamingConventionType::PascalCase,
    property_case: NamingConventionType::ScreamingSnakeCase,
    file_case: NamingConventionType::SnakeCase,
    reserved_words: &[
        "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
        "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
        "try", "while", "with", "yield", "re",
    ],
    escape_reserved: escape_with_suffix,
};

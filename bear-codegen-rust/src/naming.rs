//! Rust-specific naming conventions.

use bear_codegen::NamingConvention;
use bear_core::NamingConventionType;

/// Keywords that cannot be raw identifiers.
const NOT_RAW: &[&str] = &["crate", "self", "Self", "super"];

fn escape_rust_reserved(name: &str) -> String {
    if NOT_RAW.contains(&name) {
        format!("{}_", name)
    } else {
        format!("r#{}", name)
    }
}

/// Rust naming conventions.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    type_case: NamingConventionType::PascalCase,
    property_case: NamingConventionType::ScreamingSnakeCase,
    file_case: NamingConventionType::SnakeCase,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
        "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
        "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
    ],
    escape_reserved: escape_rust_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_naming_type() {
        assert_eq!(RUST_NAMING.type_name("hello_world").unwrap(), "HelloWorld");
        assert_eq!(RUST_NAMING.type_name("self").unwrap(), "Self_");
    }

    #[test]
    fn test_rust_naming_file() {
        assert_eq!(RUST_NAMING.file_name("HelloWorld").unwrap(), "hello_world");
    }

    #[test]
    fn test_rust_naming_property() {
        assert_eq!(
            RUST_NAMING
                .property_name("maxRetries", RUST_NAMING.property_case)
                .unwrap(),
            "MAX_RETRIES"
        );
        assert_eq!(
            RUST_NAMING
                .property_name("Type", NamingConventionType::SnakeCase)
                .unwrap(),
            "r#type"
        );
    }

    #[test]
    fn test_rust_escape_reserved() {
        assert_eq!(RUST_NAMING.safe_name("type"), "r#type");
        assert_eq!(RUST_NAMING.safe_name("self"), "self_");
        assert_eq!(RUST_NAMING.safe_name("hello"), "hello");
    }
}

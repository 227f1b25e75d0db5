//! TypeScript-specific naming conventions.

use bear_codegen::NamingConvention;
use bear_core::NamingConventionType;

fn escape_ts_reserved(name: &str) -> String {
    format!("_{}", name)
}

/// TypeScript naming conventions.
pub const TS_NAMING: NamingConvention = NamingConvention {
    type_case: NamingConventionType::PascalCase,
    property_case: NamingConventionType::CamelCase,
    file_case: NamingConventionType::KebabCase,
    reserved_words: &[
        // JavaScript reserved words
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "let",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        // TypeScript reserved words
        "any",
        "as",
        "async",
        "await",
        "boolean",
        "constructor",
        "declare",
        "get",
        "implements",
        "interface",
        "module",
        "namespace",
        "never",
        "number",
        "object",
        "package",
        "private",
        "protected",
        "public",
        "readonly",
        "require",
        "set",
        "static",
        "string",
        "symbol",
        "type",
        "undefined",
        "unknown",
        // Built-in properties of every class constructor
        "arguments",
        "caller",
        "length",
        "name",
        "prototype",
    ],
    escape_reserved: escape_ts_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ts_naming_type() {
        assert_eq!(TS_NAMING.type_name("hello-world").unwrap(), "HelloWorld");
        assert_eq!(TS_NAMING.type_name("get_user").unwrap(), "GetUser");
    }

    #[test]
    fn test_ts_naming_file() {
        assert_eq!(TS_NAMING.file_name("HelloWorld").unwrap(), "hello-world");
        assert_eq!(TS_NAMING.file_name("GetUser").unwrap(), "get-user");
    }

    #[test]
    fn test_ts_naming_property() {
        assert_eq!(
            TS_NAMING
                .property_name("user_name", TS_NAMING.property_case)
                .unwrap(),
            "userName"
        );
        assert_eq!(
            TS_NAMING
                .property_name("NAME", TS_NAMING.property_case)
                .unwrap(),
            "_name"
        );
    }

    #[test]
    fn test_ts_reserved_words() {
        assert!(TS_NAMING.is_reserved("class"));
        assert!(TS_NAMING.is_reserved("prototype"));
        assert!(!TS_NAMING.is_reserved("hello"));
        assert_eq!(TS_NAMING.safe_name("delete"), "_delete");
    }
}

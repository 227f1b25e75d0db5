use bear_codegen::{Field, Generator, Indent, NamingConvention, TypeContext, TypeMapper};
use bear_core::{PropertyType, PropertyValue, escape_string, float_literal};

use crate::{TS_NAMING, TypeScriptTypeMapper};

const INDENT: Indent = Indent::TWO;

/// TypeScript generator.
#[derive(Debug, Default)]
pub struct TypeScriptGenerator;

/// Largest integer a `number` holds exactly (`Number.MAX_SAFE_INTEGER`).
const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

fn is_big(value: &PropertyValue) -> bool {
    matches!(value, PropertyValue::Int(i) if i.unsigned_abs() > MAX_SAFE_INTEGER as u64)
}

impl TypeScriptGenerator {
    /// `number`, widened to `bigint` for integers outside the safe range.
    fn type_token(field: &Field<'_>) -> &'static str {
        if is_big(field.value()) {
            "bigint"
        } else {
            field.type_token()
        }
    }

    fn literal(field: &Field<'_>) -> String {
        match field.value() {
            PropertyValue::Bool(b) => b.to_string(),
            PropertyValue::Int(i) if is_big(field.value()) => format!("{}n", i),
            PropertyValue::Int(i) => i.to_string(),
            PropertyValue::Float(f) => float_literal(*f),
            PropertyValue::String(s) if field.ty() == PropertyType::Regex => regex_literal(s),
            PropertyValue::String(s) => format!("'{}'", escape_single_quoted(s)),
        }
    }
}

/// `/source/`, or a constructor call for an empty pattern.
fn regex_literal(source: &str) -> String {
    if source.is_empty() {
        return "new RegExp('')".to_string();
    }

    let mut out = String::with_capacity(source.len() + 2);
    out.push('/');
    let mut escaped = false;
    for c in source.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '/' if !escaped => out.push_str("\\/"),
            c => out.push(c),
        }
        escaped = c == '\\' && !escaped;
    }
    out.push('/');
    out
}

fn escape_single_quoted(s: &str) -> String {
    escape_string(s).replace("\\\"", "\"").replace('\'', "\\'")
}

impl Generator for TypeScriptGenerator {
    fn naming(&self) -> &NamingConvention {
        &TS_NAMING
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &TypeScriptTypeMapper
    }

    fn before_type(&self, _ctx: &TypeContext<'_>) -> String {
        "// Generated by bear. Do not edit manually.\n\n".to_string()
    }

    fn start_type(&self, type_name: &str) -> String {
        format!("export class {} {{\n", type_name)
    }

    fn property_before_type(&self, _field: &Field<'_>) -> String {
        String::new()
    }

    fn property_comment(&self, comment: &str) -> String {
        INDENT.comment("//", comment)
    }

    fn property_in_type(&self, field: &Field<'_>) -> String {
        format!(
            "{}static readonly {}: {} = {};\n",
            INDENT.as_str(),
            field.name(),
            Self::type_token(field),
            Self::literal(field)
        )
    }

    fn property_after_type(&self, _field: &Field<'_>) -> String {
        String::new()
    }

    fn end_type(&self, _ctx: &TypeContext<'_>) -> String {
        "}\n".to_string()
    }

    fn after_type(&self, _ctx: &TypeContext<'_>) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_integer_range() {
        assert!(!is_big(&PropertyValue::Int(MAX_SAFE_INTEGER)));
        assert!(!is_big(&PropertyValue::Int(-MAX_SAFE_INTEGER)));
        assert!(is_big(&PropertyValue::Int(MAX_SAFE_INTEGER + 1)));
        assert!(is_big(&PropertyValue::Int(i64::MIN)));
    }

    #[test]
    fn test_regex_literal() {
        assert_eq!(regex_literal(r"^\d+$"), r"/^\d+$/");
        assert_eq!(regex_literal("a/b"), r"/a\/b/");
        assert_eq!(regex_literal(r"a\/b"), r"/a\/b/");
        assert_eq!(regex_literal(r"a\\/b"), r"/a\\\/b/");
        assert_eq!(regex_literal(""), "new RegExp('')");
    }

    #[test]
    fn test_single_quoted_strings() {
        assert_eq!(escape_single_quoted("it's"), r"it\'s");
        assert_eq!(escape_single_quoted(r#"say "hi""#), r#"say "hi""#);
        assert_eq!(escape_single_quoted("a\\b\n"), r"a\\b\n");
    }
}

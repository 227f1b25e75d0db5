use bear_codegen::{Field, Generator, Indent, NamingConvention, TypeContext, TypeMapper};
use bear_core::{PropertyType, PropertyValue, escape_string, float_literal};

use crate::{PYTHON_NAMING, PythonTypeMapper};

const INDENT: Indent = Indent::FOUR;

/// Python generator.
#[derive(Debug, Default)]
pub struct PythonGenerator;

impl PythonGenerator {
    fn literal(field: &Field<'_>) -> String {
        match field.value() {
            PropertyValue::Bool(true) => "True".to_string(),
            PropertyValue::Bool(false) => "False".to_string(),
            PropertyValue::Int(i) => i.to_string(),
            PropertyValue::Float(f) => float_literal(*f),
            PropertyValue::String(s) if field.ty() == PropertyType::Regex => {
                format!("re.compile(r'{}')", escape_raw(s))
            }
            PropertyValue::String(s) => format!("'{}'", escape_single_quoted(s)),
        }
    }
}

fn escape_single_quoted(s: &str) -> String {
    escape_string(s).replace("\\\"", "\"").replace('\'', "\\'")
}

/// Make a regex source safe inside `r'...'`.
///
/// Raw strings cannot hold a bare quote, a line break or a trailing odd
/// backslash, so those are rewritten as regex escapes. A character already
/// escaped by an odd run of backslashes keeps that escape, so `\'` stays
/// `\'` and a backslash before a line break becomes `\n`.
fn escape_raw(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut backslashes = 0;
    for c in s.chars() {
        let escaped = backslashes % 2 == 1;
        match (c, escaped) {
            ('\'', true) => out.push('\''),
            ('\n', true) => out.push('n'),
            ('\r', true) => out.push('r'),
            ('\'', false) => out.push_str("\\x27"),
            ('\n', false) => out.push_str("\\n"),
            ('\r', false) => out.push_str("\\r"),
            (c, _) => out.push(c),
        }
        backslashes = if c == '\\' { backslashes + 1 } else { 0 };
    }
    if backslashes % 2 == 1 {
        out.push('\\');
    }
    out
}

impl Generator for PythonGenerator {
    fn naming(&self) -> &NamingConvention {
        &PYTHON_NAMING
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &PythonTypeMapper
    }

    fn before_type(&self, ctx: &TypeContext<'_>) -> String {
        let mut out = "# Generated by bear. Do not edit manually.\n\n".to_string();
        if ctx.has_type(PropertyType::Regex) {
            out.push_str("import re\n\n");
        }
        out.push('\n');
        out
    }

    fn start_type(&self, type_name: &str) -> String {
        format!("class {}:\n", type_name)
    }

    fn property_before_type(&self, _field: &Field<'_>) -> String {
        String::new()
    }

    fn property_comment(&self, comment: &str) -> String {
        INDENT.comment("#", comment)
    }

    fn property_in_type(&self, field: &Field<'_>) -> String {
        format!(
            "{}{}: {} = {}\n",
            INDENT.as_str(),
            field.name(),
            field.type_token(),
            Self::literal(field)
        )
    }

    fn property_after_type(&self, _field: &Field<'_>) -> String {
        String::new()
    }

    fn end_type(&self, ctx: &TypeContext<'_>) -> String {
        if ctx.is_empty() {
            format!("{}pass\n", INDENT.as_str())
        } else {
            String::new()
        }
    }

    fn after_type(&self, _ctx: &TypeContext<'_>) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_raw() {
        assert_eq!(escape_raw(r"^\d+$"), r"^\d+$");
        assert_eq!(escape_raw("it's"), r"it\x27s");
        assert_eq!(escape_raw(r"ends\"), r"ends\\");
        assert_eq!(escape_raw(r"ends\\"), r"ends\\");
    }

    #[test]
    fn test_escape_raw_keeps_existing_escapes() {
        assert_eq!(escape_raw(r"it\'s"), r"it\'s");
        assert_eq!(escape_raw(r"it\\'s"), r"it\\\x27s");
        assert_eq!(escape_raw("a\\\nb"), r"a\nb");
    }

    #[test]
    fn test_single_quoted_strings() {
        assert_eq!(escape_single_quoted("it's"), r"it\'s");
        assert_eq!(escape_single_quoted("line\n"), r"line\n");
    }
}

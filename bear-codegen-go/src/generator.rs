use bear_codegen::{Field, Generator, Indent, NamingConvention, TypeContext, TypeMapper};
use bear_core::{PropertyType, PropertyValue, escape_string, float_literal};

use crate::{GO_NAMING, GoTypeMapper};

const INDENT: Indent = Indent::GO;

/// Go generator.
#[derive(Debug, Default)]
pub struct GoGenerator;

impl GoGenerator {
    /// Package clause name: the type name lowercased, letters and digits
    /// only, with keywords escaped.
    fn package_name(type_name: &str) -> String {
        let name: String = type_name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        GO_NAMING.safe_name(&name)
    }

    fn literal(field: &Field<'_>) -> String {
        match field.value() {
            PropertyValue::Bool(b) => b.to_string(),
            PropertyValue::Int(i) => i.to_string(),
            PropertyValue::Float(f) => float_literal(*f),
            PropertyValue::String(s) if field.ty() == PropertyType::Regex => {
                format!("regexp.MustCompile({})", string_literal(s, true))
            }
            PropertyValue::String(s) => string_literal(s, false),
        }
    }
}

/// Raw string literals are preferred for regexes when the source allows it.
fn string_literal(s: &str, prefer_raw: bool) -> String {
    if prefer_raw && !s.contains(['`', '\n', '\r']) {
        format!("`{}`", s)
    } else {
        format!("\"{}\"", escape_string(s))
    }
}

impl Generator for GoGenerator {
    fn naming(&self) -> &NamingConvention {
        &GO_NAMING
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &GoTypeMapper
    }

    fn before_type(&self, ctx: &TypeContext<'_>) -> String {
        let mut out = format!(
            "// Code generated by bear. DO NOT EDIT.\n\npackage {}\n\n",
            Self::package_name(ctx.type_name())
        );
        if ctx.has_type(PropertyType::Regex) {
            out.push_str("import \"regexp\"\n\n");
        }
        out
    }

    fn start_type(&self, type_name: &str) -> String {
        format!("var {} = struct {{\n", type_name)
    }

    fn property_before_type(&self, _field: &Field<'_>) -> String {
        String::new()
    }

    fn property_comment(&self, comment: &str) -> String {
        INDENT.comment("//", comment)
    }

    fn property_in_type(&self, field: &Field<'_>) -> String {
        format!(
            "{}{} {}\n",
            INDENT.as_str(),
            field.name(),
            field.type_token()
        )
    }

    fn property_after_type(&self, _field: &Field<'_>) -> String {
        String::new()
    }

    fn end_type(&self, ctx: &TypeContext<'_>) -> String {
        let mut out = "}{\n".to_string();
        for field in ctx.fields() {
            out.push_str(&format!(
                "{}{}: {},\n",
                INDENT.as_str(),
                field.name(),
                Self::literal(field)
            ));
        }
        out.push_str("}\n");
        out
    }

    fn after_type(&self, _ctx: &TypeContext<'_>) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name() {
        assert_eq!(GoGenerator::package_name("TestConfig"), "testconfig");
        assert_eq!(GoGenerator::package_name("Http2_Server"), "http2server");
    }

    #[test]
    fn test_package_name_escapes_keywords() {
        assert_eq!(GoGenerator::package_name("Map"), "map_");
        assert_eq!(GoGenerator::package_name("Func"), "func_");
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(string_literal(r"^\d+$", true), r"`^\d+$`");
        assert_eq!(string_literal("a`b", true), "\"a`b\"");
        assert_eq!(string_literal("say \"hi\"", false), r#""say \"hi\"""#);
    }
}

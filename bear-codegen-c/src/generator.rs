use bear_codegen::{Field, Generator, Indent, NamingConvention, TypeContext, TypeMapper};
use bear_core::{NamingConventionType, PropertyValue, convert, escape_string, float_literal};

use crate::{C_NAMING, CTypeMapper};

const INDENT: Indent = Indent::FOUR;

/// C header generator.
#[derive(Debug, Default)]
pub struct CGenerator;

impl CGenerator {
    pub fn new() -> Self {
        Self
    }

    fn guard(type_name: &str) -> String {
        let name = convert(type_name, None, NamingConventionType::ScreamingSnakeCase)
            .unwrap_or_else(|_| type_name.to_uppercase());
        format!("{}_H", name)
    }

    fn literal(field: &Field<'_>) -> String {
        match field.value() {
            PropertyValue::Bool(b) => u8::from(*b).to_string(),
            PropertyValue::Int(i) => i.to_string(),
            PropertyValue::Float(f) if field.type_token() == "float" => {
                format!("{}f", float_literal(*f))
            }
            PropertyValue::Float(f) => float_literal(*f),
            PropertyValue::String(s) => format!("\"{}\"", escape_string(s)),
        }
    }
}

impl Generator for CGenerator {
    fn naming(&self) -> &NamingConvention {
        &C_NAMING
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &CTypeMapper
    }

    fn before_type(&self, ctx: &TypeContext<'_>) -> String {
        let guard = Self::guard(ctx.type_name());
        format!(
            "#ifndef {guard}\n#define {guard}\n\n/* Generated by bear. Do not edit manually. */\n"
        )
    }

    fn start_type(&self, _type_name: &str) -> String {
        "const struct {\n".to_string()
    }

    fn property_before_type(&self, _field: &Field<'_>) -> String {
        String::new()
    }

    fn property_comment(&self, comment: &str) -> String {
        format!("{}/* {} */\n", INDENT.as_str(), comment.replace("*/", "* /"))
    }

    fn property_in_type(&self, field: &Field<'_>) -> String {
        match field.value() {
            // Room for the terminating NUL
            PropertyValue::String(s) => format!(
                "{}{} {}[{}];\n",
                INDENT.as_str(),
                field.type_token(),
                field.name(),
                s.len() + 1
            ),
            _ => format!(
                "{}{} {};\n",
                INDENT.as_str(),
                field.type_token(),
                field.name()
            ),
        }
    }

    fn property_after_type(&self, _field: &Field<'_>) -> String {
        String::new()
    }

    fn end_type(&self, ctx: &TypeContext<'_>) -> String {
        let mut out = format!("}} {} = {{\n", ctx.type_name());
        for field in ctx.fields() {
            out.push_str(INDENT.as_str());
            out.push_str(&Self::literal(field));
            out.push_str(",\n");
        }
        out.push_str("};\n");
        out
    }

    fn after_type(&self, ctx: &TypeContext<'_>) -> String {
        format!("\n#endif /* {} */\n", Self::guard(ctx.type_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_from_type_name() {
        assert_eq!(CGenerator::guard("TestConfig"), "TEST_CONFIG_H");
        assert_eq!(CGenerator::guard("Settings"), "SETTINGS_H");
    }

    #[test]
    fn test_comment_cannot_close_early() {
        assert_eq!(
            CGenerator.property_comment("a */ b"),
            "    /* a * / b */\n"
        );
    }
}

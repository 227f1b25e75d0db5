use bear_codegen::{Field, Generator, Indent, NamingConvention, TypeContext, TypeMapper};
use bear_core::{PropertyValue, escape_string, float_literal};

use crate::{RUST_NAMING, RustTypeMapper};

const INDENT: Indent = Indent::FOUR;

/// Rust generator.
#[derive(Debug, Default)]
pub struct RustGenerator;

impl RustGenerator {
    fn literal(value: &PropertyValue) -> String {
        match value {
            PropertyValue::Bool(b) => b.to_string(),
            PropertyValue::Int(i) => i.to_string(),
            PropertyValue::Float(f) => float_literal(*f),
            PropertyValue::String(s) => format!("\"{}\"", escape_string(s)),
        }
    }
}

impl Generator for RustGenerator {
    fn naming(&self) -> &NamingConvention {
        &RUST_NAMING
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &RustTypeMapper
    }

    fn before_type(&self, _ctx: &TypeContext<'_>) -> String {
        "// Generated by bear. Do not edit manually.\n\n".to_string()
    }

    fn start_type(&self, type_name: &str) -> String {
        format!("pub struct {type_name};\n\nimpl {type_name} {{\n")
    }

    fn property_before_type(&self, _field: &Field<'_>) -> String {
        String::new()
    }

    fn property_comment(&self, comment: &str) -> String {
        INDENT.comment("///", comment)
    }

    fn property_in_type(&self, field: &Field<'_>) -> String {
        format!(
            "{}pub const {}: {} = {};\n",
            INDENT.as_str(),
            field.name(),
            field.type_token(),
            Self::literal(field.value())
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
    fn test_literals() {
        assert_eq!(RustGenerator::literal(&PropertyValue::Bool(true)), "true");
        assert_eq!(RustGenerator::literal(&PropertyValue::Float(1.0)), "1.0");
        assert_eq!(
            RustGenerator::literal(&PropertyValue::String("a\\b".into())),
            "\"a\\\\b\""
        );
    }

    #[test]
    fn test_multiline_comment() {
        assert_eq!(
            RustGenerator.property_comment("first\n\nsecond"),
            "    /// first\n    ///\n    /// second\n"
        );
    }
}

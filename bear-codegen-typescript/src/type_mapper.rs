//! TypeScript type mapper implementation.

use bear_codegen::TypeMapper;
use bear_core::{LanguageType, PropertyType};

/// TypeScript type mapper.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> LanguageType {
        LanguageType::TypeScript
    }

    fn map_property_type(&self, ty: PropertyType) -> Option<&'static str> {
        Some(match ty {
            PropertyType::Bool => "boolean",
            PropertyType::Int => "number",
            PropertyType::Float => "number",
            PropertyType::Double => "number",
            PropertyType::String => "string",
            PropertyType::Regex => "RegExp",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ts_property_types() {
        let mapper = TypeScriptTypeMapper;

        assert_eq!(mapper.map_property_type(PropertyType::Bool), Some("boolean"));
        assert_eq!(mapper.map_property_type(PropertyType::Int), Some("number"));
        assert_eq!(mapper.map_property_type(PropertyType::Double), Some("number"));
        assert_eq!(mapper.map_property_type(PropertyType::String), Some("string"));
        assert_eq!(mapper.map_property_type(PropertyType::Regex), Some("RegExp"));
    }
}

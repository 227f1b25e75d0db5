//! Go type mapper implementation.

use bear_codegen::TypeMapper;
use bear_core::{LanguageType, PropertyType};

/// Go type mapper.
pub struct GoTypeMapper;

impl TypeMapper for GoTypeMapper {
    fn language(&self) -> LanguageType {
        LanguageType::Go
    }

    fn map_property_type(&self, ty: PropertyType) -> Option<&'static str> {
        Some(match ty {
            PropertyType::Bool => "bool",
            PropertyType::Int => "int64",
            PropertyType::Float => "float32",
            PropertyType::Double => "float64",
            PropertyType::String => "string",
            PropertyType::Regex => "*regexp.Regexp",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_property_types() {
        let mapper = GoTypeMapper;

        assert_eq!(mapper.map_property_type(PropertyType::Int), Some("int64"));
        assert_eq!(mapper.map_property_type(PropertyType::Float), Some("float32"));
        assert_eq!(mapper.map_property_type(PropertyType::Double), Some("float64"));
        assert_eq!(
            mapper.map_property_type(PropertyType::Regex),
            Some("*regexp.Regexp")
        );
    }
}

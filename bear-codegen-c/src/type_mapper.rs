//! C type mapper implementation.

use bear_codegen::TypeMapper;
use bear_core::{LanguageType, PropertyType};

/// C type mapper.
///
/// Strings and regexes are emitted as `char` arrays sized to their content.
pub struct CTypeMapper;

impl TypeMapper for CTypeMapper {
    fn language(&self) -> LanguageType {
        LanguageType::C
    }

    fn map_property_type(&self, ty: PropertyType) -> Option<&'static str> {
        Some(match ty {
            PropertyType::Bool => "unsigned char",
            PropertyType::Int => "long long",
            PropertyType::Float => "float",
            PropertyType::Double => "double",
            PropertyType::String => "char",
            PropertyType::Regex => "char",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_property_types() {
        let mapper = CTypeMapper;

        assert_eq!(mapper.map_property_type(PropertyType::Bool), Some("unsigned char"));
        assert_eq!(mapper.map_property_type(PropertyType::Int), Some("long long"));
        assert_eq!(mapper.map_property_type(PropertyType::Float), Some("float"));
        assert_eq!(mapper.map_property_type(PropertyType::Double), Some("double"));
        assert_eq!(mapper.map_property_type(PropertyType::String), Some("char"));
        assert_eq!(mapper.map_property_type(PropertyType::Regex), Some("char"));
    }

    #[test]
    fn test_c_supports_everything() {
        assert_eq!(CTypeMapper.supported_types(), PropertyType::ALL);
    }
}

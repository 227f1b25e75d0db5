//! Python type mapper implementation.

use bear_codegen::TypeMapper;
use bear_core::{LanguageType, PropertyType};

/// Python type mapper.
pub struct PythonTypeMapper;

impl TypeMapper for PythonTypeMapper {
    fn language(&self) -> LanguageType {
        LanguageType::Python
    }

    fn map_property_type(&self, ty: PropertyType) -> Option<&'static str> {
        Some(match ty {
            PropertyType::Bool => "bool",
            PropertyType::Int => "int",
            PropertyType::Float => "float",
            PropertyType::Double => "float",
            PropertyType::String => "str",
            PropertyType::Regex => "re.Pattern",
        })
    }
}

//! Rust type mapper implementation.

use bear_codegen::TypeMapper;
use bear_core::{LanguageType, PropertyType};

/// Rust type mapper.
pub struct RustTypeMapper;

impl TypeMapper for RustTypeMapper {
    fn language(&self) -> LanguageType {
        LanguageType::Rust
    }

    fn map_property_type(&self, ty: PropertyType) -> Option<&'static str> {
        Some(match ty {
            PropertyType::Bool => "bool",
            PropertyType::Int => "i64",
            PropertyType::Float => "f32",
            PropertyType::Double => "f64",
            PropertyType::String => "&'static str",
            PropertyType::Regex => "&'static str",
        })
    }
}

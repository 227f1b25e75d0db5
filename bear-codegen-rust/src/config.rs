use bear_codegen::{Generator, LanguageConfig};
use bear_core::LanguageType;

use crate::RustGenerator;

/// Rust language plugin.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustConfig;

impl LanguageConfig for RustConfig {
    fn language_type(&self) -> LanguageType {
        LanguageType::Rust
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn generator(&self) -> Box<dyn Generator> {
        Box::new(RustGenerator)
    }

    fn allowed_file_name_pattern(&self) -> &'static str {
        "^[a-z][a-z0-9_]*$"
    }
}

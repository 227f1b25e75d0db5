use bear_codegen::{Generator, LanguageConfig};
use bear_core::LanguageType;

use crate::PythonGenerator;

/// Python language plugin.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonConfig;

impl LanguageConfig for PythonConfig {
    fn language_type(&self) -> LanguageType {
        LanguageType::Python
    }

    fn file_extension(&self) -> &'static str {
        "py"
    }

    fn generator(&self) -> Box<dyn Generator> {
        Box::new(PythonGenerator)
    }

    fn allowed_file_name_pattern(&self) -> &'static str {
        "^[a-z_][a-z0-9_]*$"
    }
}

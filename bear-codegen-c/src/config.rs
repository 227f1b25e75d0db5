use bear_codegen::{Generator, LanguageConfig};
use bear_core::LanguageType;

use crate::CGenerator;

/// C language plugin.
#[derive(Debug, Clone, Copy, Default)]
pub struct CConfig;

impl LanguageConfig for CConfig {
    fn language_type(&self) -> LanguageType {
        LanguageType::C
    }

    fn file_extension(&self) -> &'static str {
        "h"
    }

    fn generator(&self) -> Box<dyn Generator> {
        Box::new(CGenerator::new())
    }

    fn allowed_file_name_pattern(&self) -> &'static str {
        r"^\w+$"
    }
}

use bear_codegen::{Generator, LanguageConfig};
use bear_core::LanguageType;

use crate::TypeScriptGenerator;

/// TypeScript language plugin.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptConfig;

impl LanguageConfig for TypeScriptConfig {
    fn language_type(&self) -> LanguageType {
        LanguageType::TypeScript
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn generator(&self) -> Box<dyn Generator> {
        Box::new(TypeScriptGenerator)
    }

    fn allowed_file_name_pattern(&self) -> &'static str {
        "^[A-Za-z0-9_-]+$"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ts_file_names() {
        let config = TypeScriptConfig;

        assert_eq!(
            config.output_file_name("test-config").unwrap(),
            "test-config.ts"
        );
        assert!(config.validate_file_name("TestConfig").is_ok());
        assert!(config.validate_file_name("test.config").is_err());
        assert!(config.validate_file_name("test config").is_err());
    }

    #[test]
    fn test_ts_default_file_name() {
        assert_eq!(
            TypeScriptConfig.default_file_name("TestConfig").unwrap(),
            "test-config"
        );
    }
}

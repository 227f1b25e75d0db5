use bear_codegen::{Generator, LanguageConfig};
use bear_core::LanguageType;

use crate::GoGenerator;

/// Go language plugin.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoConfig;

impl LanguageConfig for GoConfig {
    fn language_type(&self) -> LanguageType {
        LanguageType::Go
    }

    fn file_extension(&self) -> &'static str {
        "go"
    }

    fn generator(&self) -> Box<dyn Generator> {
        Box::new(GoGenerator)
    }

    fn allowed_file_name_pattern(&self) -> &'static str {
        "^[a-z][a-z0-9_]*$"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_file_names() {
        let config = GoConfig;

        assert_eq!(config.output_file_name("settings").unwrap(), "settings.go");
        assert!(config.validate_file_name("test_config").is_ok());
        assert!(config.validate_file_name("_test").is_err());
        assert!(config.validate_file_name("Settings").is_err());
    }
}

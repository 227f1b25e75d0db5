//! Unified language dispatch.
//!
//! The table of supported target languages. Adding a language means adding
//! its plugin crate and one line here.

use bear_codegen::Registry;
use bear_codegen_c::CConfig;
use bear_codegen_go::GoConfig;
use bear_codegen_python::PythonConfig;
use bear_codegen_rust::RustConfig;
use bear_codegen_typescript::TypeScriptConfig;

/// Build the registry of every supported language.
pub fn registry() -> Registry {
    Registry::new()
        .with(CConfig)
        .with(RustConfig)
        .with(TypeScriptConfig)
        .with(PythonConfig)
        .with(GoConfig)
}

#[cfg(test)]
mod tests {
    use bear_core::LanguageType;

    use super::*;

    #[test]
    fn test_every_language_is_registered() {
        let registry = registry();

        assert_eq!(registry.len(), LanguageType::ALL.len());
        for language in LanguageType::ALL {
            let config = registry.resolve(language).unwrap();
            assert_eq!(config.language_type(), language);
        }
    }

    #[test]
    fn test_plugins_agree_with_their_type_mappers() {
        for config in registry().iter() {
            let generator = config.generator();
            assert_eq!(generator.type_mapper().language(), config.language_type());
        }
    }
}

//! Languages command report data structures.

use bear_codegen::Registry;
use bear_core::{LanguageType, NamingConventionType, PropertyType};

use super::output::{Output, Report};

/// Registered languages and their defaults.
#[derive(Debug)]
pub struct LanguagesReport {
    pub languages: Vec<LanguageInfo>,
}

#[derive(Debug)]
pub struct LanguageInfo {
    pub language: LanguageType,
    pub extension: &'static str,
    pub file_name_pattern: &'static str,
    pub type_case: NamingConventionType,
    pub property_case: NamingConventionType,
    pub file_case: NamingConventionType,
    pub supported_types: Vec<PropertyType>,
}

impl LanguagesReport {
    pub fn from_registry(registry: &Registry) -> Self {
        let languages = registry
            .iter()
            .map(|config| {
                let generator = config.generator();
                let naming = generator.naming();
                LanguageInfo {
                    language: config.language_type(),
                    extension: config.file_extension(),
                    file_name_pattern: config.allowed_file_name_pattern(),
                    type_case: naming.type_case,
                    property_case: naming.property_case,
                    file_case: naming.file_case,
                    supported_types: generator.type_mapper().supported_types(),
                }
            })
            .collect();

        Self { languages }
    }
}

impl Report for LanguagesReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("Languages");
        for info in &self.languages {
            out.newline();
            out.section(info.language.as_str());
            out.key_value_indented("extension", info.extension);
            out.key_value_indented("file name pattern", info.file_name_pattern);
            out.key_value_indented(
                "naming",
                &format!(
                    "type {}, property {}, file {}",
                    info.type_case, info.property_case, info.file_case
                ),
            );
            let types: Vec<_> = info.supported_types.iter().map(|t| t.as_str()).collect();
            out.key_value_indented("types", &types.join(", "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{language::registry, reports::BufferOutput};

    #[test]
    fn test_lists_registered_languages() {
        let report = LanguagesReport::from_registry(&registry());

        let languages: Vec<_> = report.languages.iter().map(|l| l.language).collect();
        assert_eq!(languages, LanguageType::ALL);

        let rust = &report.languages[1];
        assert_eq!(rust.extension, "rs");
        assert_eq!(rust.property_case, NamingConventionType::ScreamingSnakeCase);
        assert_eq!(rust.supported_types, PropertyType::ALL);
    }

    #[test]
    fn test_render() {
        let mut out = BufferOutput::default();
        LanguagesReport::from_registry(&registry()).render(&mut out);
        let text = out.text();

        assert!(text.starts_with("# Languages"));
        assert!(text.contains("typescript:\n  extension: ts"));
        assert!(text.contains("  naming: type pascal_case, property camel_case, file kebab_case"));
    }
}

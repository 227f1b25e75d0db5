//! Check command report data structures.

use bear_core::{LanguageType, PropertyType};

use super::output::{Output, Report};

/// Report data from validating a config.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: String,
    /// Container type name.
    pub type_name: String,
    /// Emitted properties, after substitution.
    pub properties: Vec<PropertySummary>,
    /// Properties used only for substitution.
    pub hidden_count: usize,
    /// Per-target results.
    pub targets: Vec<TargetCheck>,
}

/// A property as it will be emitted.
#[derive(Debug)]
pub struct PropertySummary {
    pub name: String,
    pub ty: PropertyType,
    pub value: String,
    pub comment: Option<String>,
}

/// Outcome of rendering one target, with the file name it would produce.
#[derive(Debug)]
pub struct TargetCheck {
    pub language: LanguageType,
    pub result: Result<String, miette::Report>,
}

impl CheckReport {
    pub fn is_valid(&self) -> bool {
        self.targets.iter().all(|t| t.result.is_ok())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Config", &self.config_path);
        out.key_value("Type", &self.type_name);
        out.newline();

        let heading = if self.hidden_count > 0 {
            format!(
                "Properties ({}, {} hidden)",
                self.properties.len(),
                self.hidden_count
            )
        } else {
            format!("Properties ({})", self.properties.len())
        };
        out.section(&heading);
        for property in &self.properties {
            let value = match &property.comment {
                Some(comment) => format!("{} = {}  ({})", property.ty, property.value, comment),
                None => format!("{} = {}", property.ty, property.value),
            };
            out.key_value_indented(&property.name, &value);
        }

        out.newline();
        out.section(&format!("Targets ({})", self.targets.len()));
        if self.targets.is_empty() {
            out.list_item("none listed; pass --language to generate");
        }
        for target in &self.targets {
            match &target.result {
                Ok(file_name) => out.list_item(&format!("{} -> {}", target.language, file_name)),
                Err(_) => out.list_item(&format!("{} (failed)", target.language)),
            }
        }

        let errors: Vec<_> = self
            .targets
            .iter()
            .filter_map(|t| t.result.as_ref().err())
            .collect();
        if !errors.is_empty() {
            out.newline();
            for error in errors {
                out.error(&format!("{:?}", error));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_render() {
        let report = CheckReport {
            config_path: "bear.yaml".to_string(),
            type_name: "Settings".to_string(),
            properties: vec![PropertySummary {
                name: "maxRetries".to_string(),
                ty: PropertyType::Int,
                value: "3".to_string(),
                comment: None,
            }],
            hidden_count: 1,
            targets: vec![
                TargetCheck {
                    language: LanguageType::C,
                    result: Ok("settings.h".to_string()),
                },
                TargetCheck {
                    language: LanguageType::Rust,
                    result: Err(miette::miette!("bad name")),
                },
            ],
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);
        let text = out.text();

        assert!(!report.is_valid());
        assert!(text.contains("Properties (1, 1 hidden):"));
        assert!(text.contains("  maxRetries: int = 3"));
        assert!(text.contains("  - c -> settings.h"));
        assert!(text.contains("  - rust (failed)"));
        assert!(text.contains("bad name"));
    }
}

//! Generate command report data structures.

use std::path::PathBuf;

use bear_core::LanguageType;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Files produced, in target order.
    pub files: Vec<GeneratedFile>,
    /// Languages that failed, in target order.
    pub failures: Vec<LanguageFailure>,
}

/// A file produced for one language.
#[derive(Debug)]
pub struct GeneratedFile {
    pub language: LanguageType,
    pub path: PathBuf,
    pub status: FileStatus,
}

/// What happened to a generated file.
#[derive(Debug)]
pub enum FileStatus {
    /// Written to disk.
    Written,
    /// Already up to date.
    Unchanged,
    /// Dry run, with the content that would be written.
    Preview(String),
}

/// A language whose generation failed.
#[derive(Debug)]
pub struct LanguageFailure {
    pub language: LanguageType,
    pub error: miette::Report,
}

impl GenerateReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    fn render_written(&self, out: &mut dyn Output) {
        out.section(&format!("Generated ({})", self.output_dir.display()));
        for file in &self.files {
            let path = file.path.display().to_string();
            match file.status {
                FileStatus::Written => out.added_item(&format!("{} [{}]", path, file.language)),
                FileStatus::Unchanged => {
                    out.list_item(&format!("{} [{}] unchanged", path, file.language))
                }
                FileStatus::Preview(_) => {}
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output) {
        for file in &self.files {
            if let FileStatus::Preview(content) = &file.status {
                out.divider(&file.path.display().to_string());
                out.preformatted(content);
            }
        }
    }

    fn render_failures(&self, out: &mut dyn Output) {
        for failure in &self.failures {
            out.error(&format!("{}: {:?}", failure.language, failure.error));
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if self.dry_run {
            self.render_preview(out);
        } else {
            self.render_written(out);
        }

        if self.has_failures() {
            out.newline();
            self.render_failures(out);
        }

        let total = self.files.len() + self.failures.len();
        if self.dry_run {
            out.divider("Summary");
            out.preformatted(&format!(
                "{} of {} files would be generated",
                self.files.len(),
                total
            ));
        } else {
            out.newline();
            out.key_value(
                "Summary",
                &format!("{} of {} languages generated", self.files.len(), total),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    fn file(language: LanguageType, path: &str, status: FileStatus) -> GeneratedFile {
        GeneratedFile {
            language,
            path: PathBuf::from(path),
            status,
        }
    }

    #[test]
    fn test_render_written() {
        let report = GenerateReport {
            output_dir: PathBuf::from("out"),
            dry_run: false,
            files: vec![
                file(LanguageType::C, "out/settings.h", FileStatus::Written),
                file(LanguageType::Go, "out/settings.go", FileStatus::Unchanged),
            ],
            failures: vec![LanguageFailure {
                language: LanguageType::Rust,
                error: miette::miette!("boom"),
            }],
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);
        let text = out.text();

        assert!(text.contains("  + out/settings.h [c]"));
        assert!(text.contains("  - out/settings.go [go] unchanged"));
        assert!(text.contains("! "));
        assert!(text.contains("boom"));
        assert!(text.ends_with("Summary: 2 of 3 languages generated"));
    }

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            output_dir: PathBuf::from("."),
            dry_run: true,
            files: vec![file(
                LanguageType::Python,
                "./settings.py",
                FileStatus::Preview("class Settings:\n    pass\n".to_string()),
            )],
            failures: Vec::new(),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "-- ./settings.py --",
                "class Settings:\n    pass\n",
                "-- Summary --",
                "1 of 1 files would be generated",
            ]
        );
    }
}

//! Generate operation - constants files from a config.

use std::path::Path;

use bear_codegen::Registry;
use bear_config::{Config, Target};
use bear_core::{File, LanguageType, WriteResult};
use miette::{IntoDiagnostic, WrapErr};

use crate::reports::{FileStatus, GenerateReport, GeneratedFile, LanguageFailure};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the files are written to.
    pub output_dir: &'a Path,
    /// Languages requested on the command line; empty means the config's list.
    pub languages: &'a [LanguageType],
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// One target's generated file, not yet written.
#[derive(Debug)]
pub struct RenderedFile {
    /// Base name plus extension
    pub file_name: String,
    pub content: String,
}

/// Produce the file for one target without touching the filesystem.
///
/// The base name is the target's override or the type name converted with
/// the language's file naming, validated against the language's pattern.
pub fn render_target(
    config: &Config,
    registry: &Registry,
    target: &Target,
) -> bear_codegen::Result<RenderedFile> {
    let language = registry.resolve(target.language)?;
    let type_name = config.type_name_for(target);

    let base_name = match &target.file_name {
        Some(file_name) => file_name.clone(),
        None => language.default_file_name(type_name)?,
    };
    let file_name = language.output_file_name(&base_name)?;

    let content = language
        .emission(type_name, config.properties())
        .with_property_naming(target.property_naming)
        .run()?;

    Ok(RenderedFile {
        file_name,
        content,
    })
}

/// Execute the generate operation.
///
/// Each target is rendered and written independently. A failing language
/// is recorded in the report and does not stop the others.
pub fn generate(
    config: &Config,
    registry: &Registry,
    opts: GenerateOptions,
) -> bear_config::Result<GenerateReport> {
    let targets = config.resolve_targets(opts.languages)?;

    let mut files = Vec::new();
    let mut failures = Vec::new();

    for target in &targets {
        match generate_target(config, registry, target, &opts) {
            Ok(file) => files.push(file),
            Err(error) => {
                tracing::debug!(language = %target.language, "generation failed");
                failures.push(LanguageFailure {
                    language: target.language,
                    error,
                });
            }
        }
    }

    Ok(GenerateReport {
        output_dir: opts.output_dir.to_path_buf(),
        dry_run: opts.dry_run,
        files,
        failures,
    })
}

fn generate_target(
    config: &Config,
    registry: &Registry,
    target: &Target,
    opts: &GenerateOptions,
) -> miette::Result<GeneratedFile> {
    let rendered = render_target(config, registry, target)?;
    let path = opts.output_dir.join(&rendered.file_name);

    let status = if opts.dry_run {
        FileStatus::Preview(rendered.content)
    } else {
        let file = File::new(&path, rendered.content);
        let result = file
            .write()
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;

        match result {
            WriteResult::Written => {
                tracing::info!(language = %target.language, path = %path.display(), "wrote file");
                FileStatus::Written
            }
            WriteResult::Unchanged => {
                tracing::debug!(language = %target.language, path = %path.display(), "file unchanged");
                FileStatus::Unchanged
            }
        }
    };

    Ok(GeneratedFile {
        language: target.language,
        path,
        status,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use bear_config::Format;

    use super::*;
    use crate::language::registry;

    const CONFIG: &str = r#"
type_name: Settings
languages:
  - c
  - language: rust
    file_name: settings
properties:
  - name: maxRetries
    type: int
    value: 3
  - name: enabled
    type: bool
    value: true
"#;

    fn config(src: &str) -> Config {
        Config::from_str_with_format(src, Format::Yaml, "bear.yaml").unwrap()
    }

    fn opts<'a>(dir: &'a Path, languages: &'a [LanguageType]) -> GenerateOptions<'a> {
        GenerateOptions {
            output_dir: dir,
            languages,
            dry_run: false,
        }
    }

    #[test]
    fn test_writes_every_config_target() {
        let dir = tempfile::tempdir().unwrap();
        let report = generate(&config(CONFIG), &registry(), opts(dir.path(), &[])).unwrap();

        assert!(!report.has_failures());
        assert_eq!(report.files.len(), 2);

        let header = fs::read_to_string(dir.path().join("settings.h")).unwrap();
        assert!(header.contains("long long max_retries;"));
        let rust = fs::read_to_string(dir.path().join("settings.rs")).unwrap();
        assert!(rust.contains("pub const MAX_RETRIES: i64 = 3;"));
    }

    #[test]
    fn test_requested_languages_replace_config_list() {
        let dir = tempfile::tempdir().unwrap();
        let languages = [LanguageType::Python];
        let report =
            generate(&config(CONFIG), &registry(), opts(dir.path(), &languages)).unwrap();

        assert_eq!(report.files.len(), 1);
        assert!(dir.path().join("settings.py").exists());
        assert!(!dir.path().join("settings.h").exists());
    }

    #[test]
    fn test_second_run_leaves_files_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(CONFIG);
        let registry = registry();

        generate(&config, &registry, opts(dir.path(), &[])).unwrap();
        let report = generate(&config, &registry, opts(dir.path(), &[])).unwrap();

        assert!(
            report
                .files
                .iter()
                .all(|f| matches!(f.status, FileStatus::Unchanged))
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let report = generate(
            &config(CONFIG),
            &registry(),
            GenerateOptions {
                output_dir: dir.path(),
                languages: &[],
                dry_run: true,
            },
        )
        .unwrap();

        assert_eq!(report.files.len(), 2);
        assert!(matches!(report.files[0].status, FileStatus::Preview(_)));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_failing_language_does_not_stop_others() {
        let src = r#"
type_name: Settings
languages:
  - language: rust
    file_name: Bad-Name
  - c
properties:
  - name: maxRetries
    type: int
    value: 3
"#;
        let dir = tempfile::tempdir().unwrap();
        let report = generate(&config(src), &registry(), opts(dir.path(), &[])).unwrap();

        assert!(report.has_failures());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].language, LanguageType::Rust);
        assert_eq!(report.files.len(), 1);
        assert!(dir.path().join("settings.h").exists());
    }

    #[test]
    fn test_missing_targets_is_an_error() {
        let src = r#"
properties:
  - name: maxRetries
    type: int
    value: 3
"#;
        let dir = tempfile::tempdir().unwrap();
        let err = generate(&config(src), &registry(), opts(dir.path(), &[])).unwrap_err();

        assert!(matches!(*err, bear_config::Error::MissingTarget));
    }

    #[test]
    fn test_render_target_uses_overrides() {
        let src = r#"
type_name: Settings
languages:
  - language: typescript
    type_name: AppSettings
    property_naming: snake_case
properties:
  - name: maxRetries
    type: int
    value: 3
"#;
        let config = config(src);
        let rendered = render_target(&config, &registry(), &config.targets()[0]).unwrap();

        assert_eq!(rendered.file_name, "app-settings.ts");
        assert!(rendered.content.contains("export class AppSettings {"));
        assert!(rendered.content.contains("static readonly max_retries: number = 3;"));
    }
}

use bear_core::{LanguageType, PropertyType};
use miette::Diagnostic;
use thiserror::Error;

/// Result type for code generation
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while generating one language's output.
///
/// Each error is fatal to the file being generated and carries the language
/// and the offending names so it can be reported without further context.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid name '{name}' for {language}: {reason}")]
    #[diagnostic(
        code(bear::invalid_name),
        help("names are words of letters and digits separated by '_', '-' or case changes")
    )]
    InvalidName {
        language: LanguageType,
        name: String,
        reason: String,
    },

    #[error("{language} does not support {ty} properties (property '{property}')")]
    #[diagnostic(
        code(bear::unsupported_type),
        help("change the type of '{property}' or remove {language} from the targets")
    )]
    UnsupportedType {
        language: LanguageType,
        property: String,
        ty: PropertyType,
    },

    #[error("properties '{first}' and '{second}' both become '{converted}' in {language}")]
    #[diagnostic(
        code(bear::name_collision),
        help("rename one of them or give one a naming_convention override")
    )]
    NameCollision {
        language: LanguageType,
        first: String,
        second: String,
        converted: String,
    },

    #[error("'{file_name}' is not a valid {language} file name")]
    #[diagnostic(
        code(bear::invalid_file_name),
        help("{language} file names must match `{pattern}`")
    )]
    InvalidFileName {
        language: LanguageType,
        file_name: String,
        pattern: &'static str,
    },

    #[error("invalid file name pattern `{pattern}` for {language}")]
    #[diagnostic(code(bear::invalid_pattern))]
    InvalidPattern {
        language: LanguageType,
        pattern: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("no generator registered for language '{language}'")]
    #[diagnostic(
        code(bear::unknown_language),
        help("run 'bear languages' to list the available targets")
    )]
    UnknownLanguage { language: LanguageType },
}

impl Error {
    /// Lift a naming failure from the core converter.
    pub fn invalid_name(language: LanguageType, name: &str, source: bear_core::Error) -> Self {
        let reason = match source {
            bear_core::Error::InvalidName { reason, .. } => reason,
            other => other.to_string(),
        };
        Error::InvalidName {
            language,
            name: name.to_string(),
            reason,
        }
    }

    /// The language whose generation failed.
    pub fn language(&self) -> LanguageType {
        match self {
            Error::InvalidName { language, .. }
            | Error::UnsupportedType { language, .. }
            | Error::NameCollision { language, .. }
            | Error::InvalidFileName { language, .. }
            | Error::InvalidPattern { language, .. }
            | Error::UnknownLanguage { language } => *language,
        }
    }
}

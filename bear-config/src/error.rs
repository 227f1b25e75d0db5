use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::Format;

/// Result type for config operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a format-specific message and location.
    pub fn parse_error(
        &self,
        format: Format,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            format,
            message: message.into(),
        })
    }

    /// Create a validation error, optionally pointing at a span.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create an invalid property error.
    pub fn invalid_property_error(
        &self,
        name: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidProperty {
            src: self.named_source(),
            span,
            name: name.into(),
            reason: reason.into(),
        })
    }
}

/// Errors raised while loading a config file.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(bear::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported config format '{extension}' for '{path}'")]
    #[diagnostic(
        code(bear::config::unsupported_format),
        help("use a .toml, .yaml, .yml or .json file")
    )]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("failed to parse {format} config: {message}")]
    #[diagnostic(code(bear::config::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        format: Format,
        message: String,
    },

    #[error("invalid property '{name}': {reason}")]
    #[diagnostic(code(bear::config::invalid_property))]
    InvalidProperty {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },

    #[error("duplicate property '{name}'")]
    #[diagnostic(
        code(bear::config::duplicate_property),
        help("property names must be unique within a config file")
    )]
    DuplicateProperty {
        #[source_code]
        src: NamedSource<String>,
        #[label("first defined here")]
        first_span: Option<SourceSpan>,
        #[label("defined again here")]
        second_span: Option<SourceSpan>,
        name: String,
    },

    #[error("property '{property}' references unknown property '{reference}'")]
    #[diagnostic(
        code(bear::config::unknown_reference),
        help("define '{reference}' or remove the ${{{reference}}} reference")
    )]
    UnknownReference {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown reference")]
        span: Option<SourceSpan>,
        property: String,
        reference: String,
    },

    #[error("cyclic property reference: {cycle}")]
    #[diagnostic(code(bear::config::cyclic_reference))]
    CyclicReference {
        #[source_code]
        src: NamedSource<String>,
        #[label("cycle starts here")]
        span: Option<SourceSpan>,
        cycle: String,
    },

    #[error("no target languages")]
    #[diagnostic(
        code(bear::config::missing_target),
        help("add a 'languages' list to the config or pass --language")
    )]
    MissingTarget,

    #[error("{message}")]
    #[diagnostic(code(bear::config::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

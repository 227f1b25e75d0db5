//! Config types and loading.

mod file;
mod parse;
mod raw;
mod substitute;
mod validate;

use bear_core::{LanguageType, NamingConventionType, Property};

pub use file::{DEFAULT_FILE_NAMES, find_config};

use crate::{Error, Result};

/// One requested output language and its per-language overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub language: LanguageType,
    /// Output base name without extension
    pub file_name: Option<String>,
    /// Container name, overriding the config's type name
    pub type_name: Option<String>,
    /// Default property convention, overriding the language's own
    pub property_naming: Option<NamingConventionType>,
}

impl Target {
    /// A target with no overrides.
    pub fn new(language: LanguageType) -> Self {
        Self {
            language,
            file_name: None,
            type_name: None,
            property_naming: None,
        }
    }
}

/// A loaded and validated config.
///
/// Properties are in declared order with substitutions applied and hidden
/// properties removed.
#[derive(Debug, Clone)]
pub struct Config {
    type_name: String,
    properties: Vec<Property>,
    targets: Vec<Target>,
    hidden: usize,
}

impl Config {
    /// Name of the generated container.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Emitted properties in declared order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Targets listed in the config file.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Number of hidden properties that were used for substitution only.
    pub fn hidden_count(&self) -> usize {
        self.hidden
    }

    /// Type name for a target, honouring its override.
    pub fn type_name_for<'a>(&'a self, target: &'a Target) -> &'a str {
        target.type_name.as_deref().unwrap_or(&self.type_name)
    }

    /// Decide which targets to generate.
    ///
    /// Explicitly requested languages win; their overrides are taken from
    /// the config when it lists the same language. Without a request the
    /// config's own list is used. When neither names a language the
    /// result is [`Error::MissingTarget`].
    pub fn resolve_targets(&self, requested: &[LanguageType]) -> Result<Vec<Target>> {
        if !requested.is_empty() {
            return Ok(requested
                .iter()
                .map(|language| {
                    self.targets
                        .iter()
                        .find(|t| t.language == *language)
                        .cloned()
                        .unwrap_or_else(|| Target::new(*language))
                })
                .collect());
        }

        if self.targets.is_empty() {
            return Err(Box::new(Error::MissingTarget));
        }

        Ok(self.targets.clone())
    }
}

//! Language plugin registry.
//!
//! Maps each [`LanguageType`] to the [`LanguageConfig`] that handles it.
//! Registration order is preserved so listings and generation runs are
//! deterministic.

use bear_core::LanguageType;
use indexmap::IndexMap;

use crate::{Error, LanguageConfig, Result};

/// Registered language plugins, keyed by language.
#[derive(Default)]
pub struct Registry {
    languages: IndexMap<LanguageType, Box<dyn LanguageConfig>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin, replacing any previous one for the same language.
    pub fn register(&mut self, config: impl LanguageConfig + 'static) {
        let language = config.language_type();
        if self.languages.insert(language, Box::new(config)).is_some() {
            tracing::debug!(%language, "replaced registered language");
        }
    }

    /// Builder-style [`Registry::register`].
    pub fn with(mut self, config: impl LanguageConfig + 'static) -> Self {
        self.register(config);
        self
    }

    /// Look up the plugin for a language.
    pub fn resolve(&self, language: LanguageType) -> Result<&dyn LanguageConfig> {
        self.languages
            .get(&language)
            .map(|config| config.as_ref())
            .ok_or(Error::UnknownLanguage { language })
    }

    pub fn contains(&self, language: LanguageType) -> bool {
        self.languages.contains_key(&language)
    }

    /// Registered languages in registration order.
    pub fn languages(&self) -> impl Iterator<Item = LanguageType> + '_ {
        self.languages.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn LanguageConfig> {
        self.languages.values().map(|config| config.as_ref())
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

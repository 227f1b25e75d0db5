//! Language plugin traits.
//!
//! A target language is added by implementing two traits:
//! [`LanguageConfig`] (metadata and file name validation) and [`Generator`]
//! (the emission hooks), plus a [`TypeMapper`] for native type tokens.

use bear_core::{LanguageType, Property, PropertyType};
use regex::Regex;

use super::NamingConvention;
use crate::{
    Error, Result,
    emission::{Emission, Field, TypeContext},
};

/// Per-language metadata.
///
/// Implementations are pure declarations; they hold no state and may be
/// shared between threads.
pub trait LanguageConfig: Send + Sync {
    /// Language identity
    fn language_type(&self) -> LanguageType;

    /// File extension without the dot (e.g., "h", "rs", "py")
    fn file_extension(&self) -> &'static str;

    /// Create a fresh generator for one emission
    fn generator(&self) -> Box<dyn Generator>;

    /// Regular expression the output base name (without extension) must match
    fn allowed_file_name_pattern(&self) -> &'static str;

    /// Check a candidate base name against [`LanguageConfig::allowed_file_name_pattern`].
    fn validate_file_name(&self, file_name: &str) -> Result<()> {
        let pattern = self.allowed_file_name_pattern();
        let regex = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            language: self.language_type(),
            pattern,
            source,
        })?;

        if regex.is_match(file_name) {
            Ok(())
        } else {
            Err(Error::InvalidFileName {
                language: self.language_type(),
                file_name: file_name.to_string(),
                pattern,
            })
        }
    }

    /// Validate a base name and append the extension.
    fn output_file_name(&self, file_name: &str) -> Result<String> {
        self.validate_file_name(file_name)?;
        Ok(format!("{}.{}", file_name, self.file_extension()))
    }

    /// Derive a base name from a type name using the language's file naming.
    fn default_file_name(&self, type_name: &str) -> Result<String> {
        self.generator()
            .naming()
            .file_name(type_name)
            .map_err(|e| Error::invalid_name(self.language_type(), type_name, e))
    }

    /// Bind a fresh generator to a type name and property list.
    fn emission<'a>(&self, type_name: &'a str, properties: &'a [Property]) -> Emission<'a> {
        Emission::new(
            self.language_type(),
            self.generator(),
            type_name,
            properties,
        )
    }
}

/// Emission hooks for one target language.
///
/// The hooks are called by [`Emission::run`] in a fixed order and their
/// output is concatenated:
///
/// 1. [`before_type`](Generator::before_type)
/// 2. [`start_type`](Generator::start_type)
/// 3. for each property, in declared order:
///    [`property_before_type`](Generator::property_before_type),
///    [`property_comment`](Generator::property_comment) (only when the
///    property has a comment), [`property_in_type`](Generator::property_in_type),
///    [`property_after_type`](Generator::property_after_type)
/// 4. [`end_type`](Generator::end_type)
/// 5. [`after_type`](Generator::after_type)
///
/// Names, type tokens and collisions are resolved before the first hook
/// runs, so hooks are infallible.
pub trait Generator: Send {
    /// Naming rules for types, properties and files
    fn naming(&self) -> &NamingConvention;

    /// Native type tokens for property types
    fn type_mapper(&self) -> &dyn TypeMapper;

    /// File-level preamble (guards, imports, notices)
    fn before_type(&self, ctx: &TypeContext<'_>) -> String;

    /// Open the container construct
    fn start_type(&self, type_name: &str) -> String;

    /// Leading text for a property
    fn property_before_type(&self, field: &Field<'_>) -> String;

    /// Comment for a property
    fn property_comment(&self, comment: &str) -> String;

    /// The property declaration itself
    fn property_in_type(&self, field: &Field<'_>) -> String;

    /// Trailing text for a property
    fn property_after_type(&self, field: &Field<'_>) -> String;

    /// Close the container construct
    fn end_type(&self, ctx: &TypeContext<'_>) -> String;

    /// File-level trailer
    fn after_type(&self, ctx: &TypeContext<'_>) -> String;
}

/// Trait for mapping property types to language-specific type strings.
///
/// Implementations must match every [`PropertyType`] explicitly so that a
/// new member fails to compile until each language has decided on it.
pub trait TypeMapper {
    /// The target language
    fn language(&self) -> LanguageType;

    /// Map a property type to a native type token, or `None` if unsupported
    fn map_property_type(&self, ty: PropertyType) -> Option<&'static str>;

    /// Whether the language can emit properties of this type
    fn supports(&self, ty: PropertyType) -> bool {
        self.map_property_type(ty).is_some()
    }

    /// All supported property types
    fn supported_types(&self) -> Vec<PropertyType> {
        PropertyType::ALL
            .into_iter()
            .filter(|ty| self.supports(*ty))
            .collect()
    }
}

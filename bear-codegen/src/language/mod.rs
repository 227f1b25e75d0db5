//! Language-specific abstractions.
//!
//! This module provides traits and types for language plugins:
//! - [`LanguageConfig`] - Per-language metadata and file name validation
//! - [`Generator`] - Emission hooks
//! - [`TypeMapper`] - Trait for mapping property types to language types
//! - [`NamingConvention`] - Language-specific naming rules

mod naming;
mod traits;

pub use naming::{NamingConvention, escape_with_suffix};
pub use traits::{Generator, LanguageConfig, TypeMapper};

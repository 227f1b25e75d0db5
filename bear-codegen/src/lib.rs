//! Language plugin contracts for the bear constants generator.
//!
//! This crate defines what a target language must provide and drives the
//! emission of one constants file.
//!
//! # Module Organization
//!
//! - [`language`] - Plugin traits ([`LanguageConfig`], [`Generator`], [`TypeMapper`]) and naming rules
//! - [`emission`] - The hook driver and the resolved views handed to hooks
//! - [`registry`] - Language lookup
//! - [`indent`] - Indentation styles shared by generators
//! - [`testing`] - Test utilities (feature-gated)

// Triggered by miette's derive macro on struct-like enum variants
#![allow(unused_assignments)]

pub mod emission;
mod error;
pub mod indent;
pub mod language;
pub mod registry;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use emission::{Emission, Field, TypeContext};
pub use error::{Error, Result};
pub use indent::Indent;
pub use language::{Generator, LanguageConfig, NamingConvention, TypeMapper, escape_with_suffix};
pub use registry::Registry;

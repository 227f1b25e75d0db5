//! Core types and utilities for the bear constants generator.
//!
//! This crate provides the property model, the naming-convention converter
//! and the output file writer used across the workspace.

mod error;
mod file;
pub mod naming;
mod property;
mod types;
mod utils;

pub use error::{Error, Result};
// File operations
pub use file::{File, WriteResult};
pub use naming::convert;
pub use property::{Property, PropertyValue};
// Fundamental types
pub use types::{LanguageType, NamingConventionType, PropertyType};
// String utilities
pub use utils::{escape_string, float_literal, validate_identifier};

//! Config file loading for the bear constants generator.
//!
//! A config declares the container type name, the target languages and an
//! ordered list of typed properties, in TOML, YAML or JSON:
//!
//! ```yaml
//! type_name: Settings
//! languages:
//!   - c
//!   - language: rust
//!     file_name: settings
//! properties:
//!   - name: maxRetries
//!     type: int
//!     value: 3
//! ```
//!
//! Loading validates names, types and values, resolves `${name}`
//! references between string properties and drops hidden properties.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod format;

pub use config::{Config, DEFAULT_FILE_NAMES, Target, find_config};
pub use error::{Error, Result, SourceContext};
pub use format::Format;

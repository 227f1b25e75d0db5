//! TypeScript generator.
//!
//! Emits an exported class of `static readonly` members.

mod config;
mod generator;
mod naming;
mod type_mapper;

pub use config::TypeScriptConfig;
pub use generator::TypeScriptGenerator;
pub use naming::TS_NAMING;
pub use type_mapper::TypeScriptTypeMapper;

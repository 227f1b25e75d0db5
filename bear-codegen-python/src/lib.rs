//! Python generator.
//!
//! Emits a class of annotated attributes. `re` is imported only when a regex
//! property is present.

mod config;
mod generator;
mod naming;
mod type_mapper;

pub use config::PythonConfig;
pub use generator::PythonGenerator;
pub use naming::PYTHON_NAMING;
pub use type_mapper::PythonTypeMapper;

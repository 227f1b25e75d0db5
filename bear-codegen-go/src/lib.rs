//! Go generator.
//!
//! Emits a package-level anonymous struct value:
//!
//! ```go
//! package settings
//!
//! var Settings = struct {
//! 	MaxRetries int64
//! }{
//! 	MaxRetries: 3,
//! }
//! ```

mod config;
mod generator;
mod naming;
mod type_mapper;

pub use config::GoConfig;
pub use generator::GoGenerator;
pub use naming::GO_NAMING;
pub use type_mapper::GoTypeMapper;

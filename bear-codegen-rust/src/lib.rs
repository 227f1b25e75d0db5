//! Rust generator.
//!
//! Emits a unit struct carrying associated constants:
//!
//! ```rust,ignore
//! pub struct Settings;
//!
//! impl Settings {
//!     pub const MAX_RETRIES: i64 = 3;
//! }
//! ```

mod config;
mod generator;
mod naming;
mod type_mapper;

pub use config::RustConfig;
pub use generator::RustGenerator;
pub use naming::RUST_NAMING;
pub use type_mapper::RustTypeMapper;

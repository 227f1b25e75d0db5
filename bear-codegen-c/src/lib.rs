//! C header generator.
//!
//! Emits a `const struct` with include guards:
//!
//! ```c
//! #ifndef SETTINGS_H
//! #define SETTINGS_H
//!
//! /* Generated by bear. Do not edit manually. */
//! const struct {
//!     long long max_retries;
//! } Settings = {
//!     3,
//! };
//!
//! #endif /* SETTINGS_H */
//! ```

mod config;
mod generator;
mod naming;
mod type_mapper;

pub use config::CConfig;
pub use generator::CGenerator;
pub use naming::C_NAMING;
pub use type_mapper::CTypeMapper;

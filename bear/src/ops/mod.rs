//! Operations behind the commands.
//!
//! They take a loaded config and the language registry and return reports;
//! argument parsing and printing live elsewhere.

pub mod check;
pub mod generate;

pub use check::check;
pub use generate::generate;

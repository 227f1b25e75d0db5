//! Command reports.
//!
//! Operations collect results into these structures and commands render
//! them through an [`output::Output`].

mod check;
mod generate;
mod languages;
mod output;

pub use check::{CheckReport, PropertySummary, TargetCheck};
pub use generate::{FileStatus, GenerateReport, GeneratedFile, LanguageFailure};
pub use languages::LanguagesReport;
pub use output::{Report, TerminalOutput};

#[cfg(test)]
pub(crate) use output::testing::BufferOutput;

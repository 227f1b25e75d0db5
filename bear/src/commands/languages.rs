use clap::Args;
use eyre::Result;

use crate::{
    language::registry,
    reports::{LanguagesReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct LanguagesCommand {}

impl LanguagesCommand {
    pub fn run(&self) -> Result<()> {
        LanguagesReport::from_registry(&registry()).render(&mut TerminalOutput::new());
        Ok(())
    }
}

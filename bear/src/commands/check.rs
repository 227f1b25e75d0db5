use std::path::PathBuf;

use bear_config::Config;
use clap::Args;
use eyre::Result;

use super::{UnwrapOrExit, config_path};
use crate::{
    language::registry,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the config file (defaults to bear.yaml, bear.yml, bear.toml or bear.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let path = config_path(self.config.as_deref())?;
        let config = Config::from_file(&path).unwrap_or_exit();

        let report = ops::check(&path, &config, &registry());
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}

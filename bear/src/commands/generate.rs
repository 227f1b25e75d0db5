use std::path::PathBuf;

use bear_config::Config;
use bear_core::LanguageType;
use clap::Args;
use eyre::Result;

use super::{UnwrapOrExit, config_path};
use crate::{
    language::registry,
    ops::{self, generate::GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the config file (defaults to bear.yaml, bear.yml, bear.toml or bear.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Target language, repeatable (overrides the config's languages)
    #[arg(short, long = "language", value_name = "LANGUAGE")]
    pub languages: Vec<LanguageType>,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let path = config_path(self.config.as_deref())?;
        let config = Config::from_file(&path).unwrap_or_exit();
        tracing::debug!(path = %path.display(), "loaded config");

        let report = ops::generate(
            &config,
            &registry(),
            GenerateOptions {
                output_dir: &self.output,
                languages: &self.languages,
                dry_run: self.dry_run,
            },
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());

        if report.has_failures() {
            std::process::exit(1);
        }

        Ok(())
    }
}

mod check;
mod completions;
mod generate;
mod languages;

use std::path::{Path, PathBuf};

use bear_config::{DEFAULT_FILE_NAMES, find_config};
use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use languages::LanguagesCommand;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for bear_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Use the given config path, or look for a default one in the current directory.
fn config_path(config: Option<&Path>) -> Result<PathBuf> {
    match config {
        Some(path) => Ok(path.to_path_buf()),
        None => find_config(".").ok_or_else(|| {
            eyre::eyre!(
                "no config file found in the current directory (looked for {})",
                DEFAULT_FILE_NAMES.join(", ")
            )
        }),
    }
}

#[derive(Parser)]
#[command(name = "bear")]
#[command(version)]
#[command(about = "Generate typed constants files for many languages from one config")]
pub(crate) struct Cli {
    /// Show debug logs
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Languages(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate constants files from a config
    Generate(GenerateCommand),

    /// Validate a config without writing files
    Check(CheckCommand),

    /// List supported target languages
    Languages(LanguagesCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

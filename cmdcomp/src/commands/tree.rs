use std::path::PathBuf;

use clap::Args;
use cmdcomp_manifest::{DEFAULT_FILENAME, Manifest};
use eyre::{Result, eyre};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct TreeCommand {
    /// Path to cmdcomp.toml (defaults to ./cmdcomp.toml)
    #[arg(short, long, default_value = DEFAULT_FILENAME)]
    pub config: PathBuf,

    /// Command path to start from, the whole tree when empty
    pub words: Vec<String>,
}

impl TreeCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();

        let completions = manifest
            .completions(&self.words)
            .ok_or_else(|| eyre!("no subcommand at '{}'", self.words.join(" ")))?;

        println!("{}", serde_json::to_string_pretty(&completions)?);
        Ok(())
    }
}

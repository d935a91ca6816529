use std::path::PathBuf;

use clap::Args;
use cmdcomp_manifest::{DEFAULT_FILENAME, ManifestFile};
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to cmdcomp.toml (defaults to ./cmdcomp.toml)
    #[arg(short, long, default_value = DEFAULT_FILENAME)]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        let manifest = file.manifest();

        println!("✓ {} is valid\n", file.path().display());
        println!("  {}", manifest.app.name);
        if let Some(desc) = &manifest.app.description {
            println!("  {}", desc);
        }

        let count = manifest.subcommand_count();
        println!(
            "  {} subcommand{}",
            count,
            if count == 1 { "" } else { "s" }
        );
        Ok(())
    }
}

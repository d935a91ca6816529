use std::{io::Write, path::PathBuf};

use clap::Args;
use cmdcomp_manifest::{DEFAULT_FILENAME, Manifest};
use eyre::{Context, Result};
use tracing::debug;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CompleteCommand {
    /// Path to cmdcomp.toml (defaults to ./cmdcomp.toml)
    #[arg(short, long, default_value = DEFAULT_FILENAME)]
    pub config: PathBuf,

    /// Print candidates as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Words typed so far, without the command name
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

impl CompleteCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        write_candidates(std::io::stdout().lock(), &manifest, &self.words, self.json)
    }
}

/// Write the candidates following `words`, one per line or as a JSON array.
///
/// A path that leaves the tree writes nothing.
fn write_candidates<W: Write>(
    mut out: W,
    manifest: &Manifest,
    words: &[String],
    json: bool,
) -> Result<()> {
    let Some(candidates) = manifest.candidates(words) else {
        debug!(?words, "command path left the tree");
        return Ok(());
    };

    if json {
        serde_json::to_writer(&mut out, &candidates)?;
        writeln!(out)?;
    } else {
        for candidate in &candidates {
            writeln!(out, "{}", candidate).wrap_err("Failed to write candidates")?;
        }
    }
    Ok(())
}

//! Manifest types and parsing for cmdcomp.toml files.

mod app;
mod file;
mod parse;
mod validate;

pub use app::AppConfig;
use cmdcomp_core::{Candidates, Completions, Subcommand};
pub use file::ManifestFile;
pub use parse::parse_manifest;
use serde::Deserialize;
pub use validate::ParseContext;

/// Root manifest for cmdcomp.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Application metadata
    pub app: AppConfig,

    /// The command itself; its subcommands are the first completion level
    #[serde(default)]
    pub root: Subcommand,
}

impl Manifest {
    /// Candidates offered after the command path `words`.
    ///
    /// Returns `None` when the path leaves the tree.
    pub fn candidates<I, S>(&self, words: I) -> Option<Candidates>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.root.lookup(words).map(Subcommand::candidates)
    }

    /// Nested completions below the command path `words`.
    pub fn completions<I, S>(&self, words: I) -> Option<Completions>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.root.lookup(words).map(Subcommand::completions)
    }

    /// Count all subcommands below the root.
    pub fn subcommand_count(&self) -> usize {
        fn count(node: &Subcommand) -> usize {
            node.subcommands()
                .values()
                .map(|child| 1 + count(child))
                .sum()
        }
        count(&self.root)
    }
}

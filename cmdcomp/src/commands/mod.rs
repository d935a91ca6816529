mod check;
mod complete;
mod completions;
mod tree;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use complete::CompleteCommand;
use completions::CompletionsCommand;
use eyre::Result;
use tree::TreeCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for cmdcomp_manifest::Result<T> {
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

#[derive(Parser)]
#[command(name = "cmdcomp")]
#[command(version)]
#[command(about = "Shell completion candidates from a declarative subcommand tree")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Complete(cmd) => cmd.run(),
            Commands::Tree(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the candidates that can follow a command path
    Complete(CompleteCommand),

    /// Print nested completions below a command path as JSON
    Tree(TreeCommand),

    /// Validate cmdcomp.toml
    Check(CheckCommand),

    /// Generate shell completions for cmdcomp itself
    Completions(CompletionsCommand),
}

//! Subcommand tree model and completion resolution for cmdcomp.
//!
//! A [`Subcommand`] tree describes every command path a CLI accepts. For any
//! node in the tree, [`Subcommand::candidates`] answers "what can follow
//! here?" with plain tokens or structured hints ([`Candidate`]) that a shell
//! integration turns into actual completions.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod candidate;
mod error;
mod name;
mod option;
mod resolve;
mod subcommand;
mod validate;

pub use candidate::{Candidate, Candidates, Completions, OptionType};
pub use error::{Error, Result};
pub use name::SubcommandName;
pub use option::{CommandDescriptor, CommandOption, FileDescriptor};
pub use resolve::resolve;
pub use subcommand::{Subcommand, Subcommands};
pub use validate::{NodePath, check_definition};

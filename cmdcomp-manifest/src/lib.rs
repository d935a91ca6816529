//! Loading of `cmdcomp.toml` configuration files into a subcommand tree.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{AppConfig, Manifest, ManifestFile, ParseContext, parse_manifest};

/// Default configuration filename
pub const DEFAULT_FILENAME: &str = "cmdcomp.toml";

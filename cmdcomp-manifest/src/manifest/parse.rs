//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use tracing::debug;

use super::{Manifest, validate::ParseContext};
use crate::{DEFAULT_FILENAME, Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, DEFAULT_FILENAME)
    }
}

impl Manifest {
    /// Parse a cmdcomp.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = read_source(path)?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a cmdcomp.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Read a configuration file, mapping failures to [`Error::Io`].
pub(super) fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })
}

/// Parse a manifest from content with the given filename for error reporting.
///
/// Decoding already rejects unknown option shapes and nodes that define both
/// an option and subcommands; the names of all subcommands and aliases are
/// checked afterwards.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;

    debug!(
        filename,
        app = %manifest.app.name,
        subcommands = manifest.subcommand_count(),
        "loaded manifest"
    );
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    manifest.root.validate_at(&ctx.node_path())?;
    ctx.validate_subcommands(&manifest.root)
}

use std::path::{Path, PathBuf};

use super::{Manifest, parse::read_source};
use crate::Result;

/// A cmdcomp.toml file with both its raw content and the parsed manifest.
///
/// The raw content is kept so diagnostics raised after loading can still
/// point into the source.
pub struct ManifestFile {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl ManifestFile {
    /// Open and parse a cmdcomp.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = read_source(&path)?;
        let manifest = Manifest::from_str_with_filename(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Take the parsed manifest, dropping the raw content.
    pub fn into_manifest(self) -> Manifest {
        self.manifest
    }
}

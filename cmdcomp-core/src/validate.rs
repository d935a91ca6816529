//! Structural validation of subcommand definitions.

use std::fmt;

use tracing::trace;

use indexmap::IndexMap;

use crate::{CommandOption, Error, Result, Subcommand, SubcommandName};

/// Path of a node below the root, used in diagnostics.
///
/// ```ignore
/// let path = NodePath::root().push("db").push("migrate");
/// assert_eq!(path.to_string(), "db.migrate");
/// ```
#[derive(Debug, Clone, Default)]
pub struct NodePath<'a> {
    segments: Vec<&'a str>,
}

impl<'a> NodePath<'a> {
    /// Create the path of the root node.
    pub fn root() -> Self {
        Self::default()
    }

    /// Push a path segment and return a new path.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// Check if this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for NodePath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

/// Check that a node does not define both an option and subcommands.
///
/// Empty lists do not count. Only the node itself is checked, not its
/// children.
pub fn check_definition<V>(
    option: Option<&CommandOption>,
    subcommands: &IndexMap<SubcommandName, V>,
    path: &NodePath<'_>,
) -> Result<()> {
    match option {
        Some(option) if !option.is_empty() && !subcommands.is_empty() => Err(
            Error::subcommand_define(path.to_string(), option, subcommands.keys()),
        ),
        _ => Ok(()),
    }
}

impl Subcommand {
    /// Validate this node and all of its descendants.
    ///
    /// Walks the tree top-down in insertion order and stops at the first
    /// violation.
    pub fn validate(&self) -> Result<()> {
        self.validate_at(&NodePath::root())
    }

    /// Validate with a known location, for trees nested inside a larger document.
    pub fn validate_at(&self, path: &NodePath<'_>) -> Result<()> {
        trace!(path = %path, "validating subcommand");
        check_definition(self.option(), self.subcommands(), path)?;

        for (name, child) in self.subcommands() {
            child.validate_at(&path.push(name.as_str()))?;
        }
        Ok(())
    }
}

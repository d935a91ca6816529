//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use cmdcomp_core::{CommandOption, NodePath, Subcommand};
use miette::SourceSpan;
use tracing::trace;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Holds the source content, filename and current path through the
/// subcommand tree so recursive validation can report where it failed.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "cmdcomp.toml");
/// ctx.validate_name("start", "subcommand")?;
///
/// let nested = ctx.push("db").push("migrate");
/// nested.validate_name("up", "alias")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Subcommand names from the root down to the current node
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &str {
        self.source.src()
    }

    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get the current path in the form used by the core validator.
    pub fn node_path(&self) -> NodePath<'a> {
        self.path
            .iter()
            .fold(NodePath::root(), |path, segment| path.push(*segment))
    }

    /// Get a context description for error messages.
    ///
    /// For example: "alias in 'db.migrate'" or just "subcommand" at the root.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Validate that a name can be offered as a completion token.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        match validate_token(name) {
            Some(reason) => Err(self.source.invalid_name_error(
                name,
                self.context_for(kind),
                reason,
                find_name_span(self.source.src(), name),
            )),
            None => Ok(()),
        }
    }

    /// Validate the literal values of a node's option.
    ///
    /// Values are offered verbatim, so flag-like values such as `--force`
    /// are fine; only empty values are rejected.
    pub fn validate_option(&self, node: &Subcommand) -> Result<()> {
        let values: &[String] = match node.option() {
            Some(CommandOption::Str(value)) => std::slice::from_ref(value),
            Some(CommandOption::List(values)) => values,
            _ => &[],
        };

        match values.iter().find(|value| value.is_empty()) {
            Some(value) => Err(self.source.invalid_name_error(
                value.as_str(),
                self.context_for("option value"),
                "option value cannot be empty",
                find_name_span(self.source.src(), value),
            )),
            None => Ok(()),
        }
    }

    /// Validate `node`'s option, then the names, aliases and options of
    /// every subcommand below it.
    pub fn validate_subcommands(&self, node: &'a Subcommand) -> Result<()> {
        self.validate_option(node)?;

        for (name, child) in node.subcommands() {
            trace!(path = %self.path_string(), subcommand = %name, "validating names");
            self.validate_name(name.as_str(), "subcommand")?;

            let nested = self.push(name.as_str());
            for alias in child.aliases() {
                nested.validate_name(alias, "alias")?;
            }
            nested.validate_subcommands(child)?;
        }
        Ok(())
    }
}

/// Check that a name is usable as a shell token.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_token(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }
    if name.starts_with('-') {
        return Some("name cannot start with '-', it would be read as a flag");
    }
    if name.chars().any(char::is_whitespace) {
        return Some("name cannot contain whitespace");
    }
    None
}

/// Find the span of a name in the TOML source.
///
/// Looks at table headers first (`.name]`, `.name.`, quoted or bare), then
/// at quoted strings such as alias values.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let header_patterns = [
        (format!(".{}]", name), 1usize),
        (format!(".{}.", name), 1usize),
        (format!(".\"{}\"]", name), 2usize),
        (format!(".\"{}\".", name), 2usize),
    ];

    for (pattern, skip) in &header_patterns {
        if let Some(pos) = src.find(pattern) {
            return Some(SourceSpan::from((pos + skip, name.len())));
        }
    }

    let quoted = format!("\"{}\"", name);
    src.find(&quoted)
        .map(|pos| SourceSpan::from((pos + 1, name.len())))
}

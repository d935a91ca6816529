//! Completion candidates and their wire format.
//!
//! Structured candidates use exactly two keys, `command` and `file`. The
//! shell integration scripts depend on these names.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::SubcommandName;

/// Key of a structured candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Command,
    File,
}

impl OptionType {
    /// Get the wire key
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Command => "command",
            OptionType::File => "file",
        }
    }
}

/// One shell-completion suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Candidate {
    /// Literal token: a subcommand name, an alias or a configured string.
    Token(String),
    /// `{"command": "$(...)"}`: substitute the output of a shell expression.
    Command { command: String },
    /// `{"file": "..."}`: list filesystem entries under a base path.
    File { file: String },
}

impl Candidate {
    /// Create a literal token candidate.
    pub fn token(token: impl Into<String>) -> Self {
        Candidate::Token(token.into())
    }

    /// Wrap a shell expression as a command substitution.
    pub fn command(execute: impl Into<String>) -> Self {
        Candidate::Command {
            command: format!("$({})", execute.into()),
        }
    }

    /// Create a candidate listing entries under `base_path`.
    pub fn file(base_path: impl Into<String>) -> Self {
        Candidate::File {
            file: base_path.into(),
        }
    }

    /// The structured key, or `None` for plain tokens.
    pub fn option_type(&self) -> Option<OptionType> {
        match self {
            Candidate::Token(_) => None,
            Candidate::Command { .. } => Some(OptionType::Command),
            Candidate::File { .. } => Some(OptionType::File),
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Token(token) => f.write_str(token),
            Candidate::Command { command } => write!(f, "{}:{}", OptionType::Command.as_str(), command),
            Candidate::File { file } => write!(f, "{}:{}", OptionType::File.as_str(), file),
        }
    }
}

/// Ordered candidate list for a single node.
pub type Candidates = Vec<Candidate>;

/// Result of a completion query, shaped like the queried part of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Completions {
    Candidates(Candidates),
    Nested(IndexMap<SubcommandName, Completions>),
}

impl Completions {
    /// Get the candidates at a leaf, if this is one.
    pub fn as_candidates(&self) -> Option<&Candidates> {
        match self {
            Completions::Candidates(candidates) => Some(candidates),
            Completions::Nested(_) => None,
        }
    }

    /// Get the nested completions of a child by name.
    pub fn get(&self, name: &str) -> Option<&Completions> {
        match self {
            Completions::Candidates(_) => None,
            Completions::Nested(children) => children.get(name),
        }
    }
}

impl From<Candidates> for Completions {
    fn from(candidates: Candidates) -> Self {
        Completions::Candidates(candidates)
    }
}

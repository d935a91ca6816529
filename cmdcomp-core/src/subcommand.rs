use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::{
    Candidates, CommandOption, Completions, NodePath, Result, SubcommandName, check_definition,
    name::deserialize_aliases, resolve,
};

/// Ordered mapping of child subcommands; iteration follows insertion order.
pub type Subcommands = IndexMap<SubcommandName, Subcommand>;

/// A node of the command tree.
///
/// A node either completes its own [`CommandOption`] or routes to child
/// subcommands, never both. Every constructor enforces this, so an invalid
/// node cannot be built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawSubcommand")]
pub struct Subcommand {
    aliases: Vec<String>,
    option: Option<CommandOption>,
    subcommands: Subcommands,
}

/// Subcommand as written in the configuration, before the definition check.
///
/// Children stay raw until the whole tree is decoded, so conflicts are
/// checked top-down and report their path from the decoded node.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSubcommand {
    #[serde(default, alias = "aliases", deserialize_with = "deserialize_aliases")]
    alias: Vec<String>,

    #[serde(default, alias = "options")]
    option: Option<CommandOption>,

    #[serde(default)]
    subcommands: IndexMap<SubcommandName, RawSubcommand>,
}

impl RawSubcommand {
    fn into_subcommand(self, path: &NodePath<'_>) -> Result<Subcommand> {
        check_definition(self.option.as_ref(), &self.subcommands, path)?;

        let mut subcommands = Subcommands::with_capacity(self.subcommands.len());
        for (name, raw) in self.subcommands {
            let child = raw.into_subcommand(&path.push(name.as_str()))?;
            subcommands.insert(name, child);
        }

        Ok(Subcommand {
            aliases: self.alias,
            option: self.option,
            subcommands,
        })
    }
}

impl TryFrom<RawSubcommand> for Subcommand {
    type Error = Box<crate::Error>;

    fn try_from(raw: RawSubcommand) -> Result<Self> {
        raw.into_subcommand(&NodePath::root())
    }
}

impl Subcommand {
    /// Create a node, failing if it defines both an option and subcommands.
    pub fn new(
        aliases: impl IntoIterator<Item = impl Into<String>>,
        option: Option<CommandOption>,
        subcommands: Subcommands,
    ) -> Result<Self> {
        check_definition(option.as_ref(), &subcommands, &NodePath::root())?;
        Ok(Self {
            aliases: aliases.into_iter().map(Into::into).collect(),
            option,
            subcommands,
        })
    }

    /// Create a leaf node completing the given option.
    pub fn leaf(option: CommandOption) -> Self {
        Self {
            option: Some(option),
            ..Self::default()
        }
    }

    /// Create a node routing to the given subcommands.
    pub fn group<N: Into<SubcommandName>>(
        subcommands: impl IntoIterator<Item = (N, Subcommand)>,
    ) -> Self {
        Self {
            subcommands: subcommands
                .into_iter()
                .map(|(name, subcommand)| (name.into(), subcommand))
                .collect(),
            ..Self::default()
        }
    }

    /// Replace the aliases of this node.
    pub fn with_aliases(mut self, aliases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Additional names routing to this node, in configuration order.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Get the option completed by this node, if any.
    pub fn option(&self) -> Option<&CommandOption> {
        self.option.as_ref()
    }

    /// Get the child subcommands in insertion order.
    pub fn subcommands(&self) -> &Subcommands {
        &self.subcommands
    }

    /// Returns true if this node has subcommands
    pub fn has_subcommands(&self) -> bool {
        !self.subcommands.is_empty()
    }

    /// Tokens that route to this node: its canonical name, then its aliases.
    pub fn targets(&self, name: &SubcommandName) -> Vec<String> {
        std::iter::once(name.to_string())
            .chain(self.aliases.iter().cloned())
            .collect()
    }

    /// Completion candidates offered right after this node.
    pub fn candidates(&self) -> Candidates {
        resolve(&self.subcommands, self.option.as_ref())
    }

    /// Find the child routed to by `token`.
    ///
    /// Canonical names win over aliases; among aliases the first child in
    /// insertion order wins.
    pub fn child(&self, token: &str) -> Option<(&SubcommandName, &Subcommand)> {
        self.subcommands.get_key_value(token).or_else(|| {
            self.subcommands
                .iter()
                .find(|(_, child)| child.aliases.iter().any(|alias| alias == token))
        })
    }

    /// Descend along `words` from this node.
    ///
    /// Descent stops at a node without subcommands, since the remaining words
    /// are arguments of that leaf. Returns `None` when a word matches no child.
    pub fn lookup<I, S>(&self, words: I) -> Option<&Subcommand>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut current = self;
        for word in words {
            if !current.has_subcommands() {
                break;
            }
            let word = word.as_ref();
            match current.child(word) {
                Some((name, child)) => {
                    debug!(word, name = %name, "descending into subcommand");
                    current = child;
                }
                None => {
                    debug!(word, "no subcommand matches word");
                    return None;
                }
            }
        }
        Some(current)
    }

    /// Completions for this node and everything below it.
    ///
    /// A node without subcommands yields its candidates; otherwise each child
    /// name maps to that child's completions.
    pub fn completions(&self) -> Completions {
        if self.has_subcommands() {
            Completions::Nested(
                self.subcommands
                    .iter()
                    .map(|(name, child)| (name.clone(), child.completions()))
                    .collect(),
            )
        } else {
            Completions::Candidates(self.candidates())
        }
    }
}

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Deserializer, Serialize};

/// Canonical name of a subcommand.
///
/// Used as the key of a parent's subcommand map and as a completion token.
/// Kept distinct from plain strings so aliases, literal option values and
/// names cannot be mixed up at call sites.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubcommandName(String);

impl SubcommandName {
    /// Create a name from any string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the owned inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SubcommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SubcommandName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SubcommandName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SubcommandName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for SubcommandName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for SubcommandName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SubcommandName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Untagged enum to support both a single alias and a list of aliases
#[derive(Debug, Deserialize)]
#[serde(untagged, expecting = "a string or a list of strings")]
enum AliasFormat {
    One(String),
    Many(Vec<String>),
}

impl From<AliasFormat> for Vec<String> {
    fn from(format: AliasFormat) -> Self {
        match format {
            AliasFormat::One(alias) => vec![alias],
            AliasFormat::Many(aliases) => aliases,
        }
    }
}

/// Deserialize aliases from either `alias = "run"` or `alias = ["run", "up"]`
pub(crate) fn deserialize_aliases<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    AliasFormat::deserialize(deserializer).map(Into::into)
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "deserialize_aliases")]
        alias: Vec<String>,
    }

    #[test]
    fn test_single_alias_becomes_one_element_list() {
        let holder: Holder = toml::from_str(r#"alias = "run""#).unwrap();
        assert_eq!(holder.alias, vec!["run"]);
    }

    #[test]
    fn test_alias_list_is_kept_in_order() {
        let holder: Holder = toml::from_str(r#"alias = ["up", "run", "up"]"#).unwrap();
        assert_eq!(holder.alias, vec!["up", "run", "up"]);
    }

    #[test]
    fn test_alias_rejects_other_shapes() {
        let err = toml::from_str::<Holder>("alias = 3").unwrap_err();
        assert!(err.to_string().contains("a string or a list of strings"));
    }

    #[test]
    fn test_name_lookup_by_str() {
        let mut map = IndexMap::new();
        map.insert(SubcommandName::from("start"), 1);

        assert_eq!(map.get("start"), Some(&1));
        assert_eq!(SubcommandName::new("start"), "start");
        assert_eq!(SubcommandName::new("start").to_string(), "start");
    }
}

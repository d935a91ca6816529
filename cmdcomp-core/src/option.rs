use std::fmt;

use serde::Deserialize;

/// The completion behavior of a subcommand that has no further subcommands.
///
/// The set is closed: anything else in the configuration is rejected while
/// deserializing, so the resolver never sees an unknown shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "OptionFormat")]
pub enum CommandOption {
    /// A single literal candidate.
    Str(String),
    /// A list of literal strings.
    List(Vec<String>),
    /// Candidates computed by a shell command at completion time.
    Command(CommandDescriptor),
    /// Candidates listed from the filesystem.
    File(FileDescriptor),
}

/// Shell expression to run when completing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandDescriptor {
    pub execute: String,
}

/// Base path to enumerate when completing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileDescriptor {
    pub base_path: String,
}

impl CommandOption {
    /// Build a command descriptor option.
    pub fn command(execute: impl Into<String>) -> Self {
        Self::Command(CommandDescriptor {
            execute: execute.into(),
        })
    }

    /// Build a file descriptor option.
    pub fn file(base_path: impl Into<String>) -> Self {
        Self::File(FileDescriptor {
            base_path: base_path.into(),
        })
    }

    /// Whether the option carries nothing to offer.
    ///
    /// Only an empty list counts as no option at all when checking a node
    /// against its subcommands. A string, even an empty one, is always
    /// offered as a candidate, so it never is.
    pub fn is_empty(&self) -> bool {
        match self {
            CommandOption::List(values) => values.is_empty(),
            CommandOption::Str(_) | CommandOption::Command(_) | CommandOption::File(_) => false,
        }
    }

    /// Get the kind name used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            CommandOption::Str(_) => "string",
            CommandOption::List(_) => "list",
            CommandOption::Command(_) => "command",
            CommandOption::File(_) => "file",
        }
    }
}

impl fmt::Display for CommandOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOption::Str(value) => write!(f, "{:?}", value),
            CommandOption::List(values) => write!(f, "{:?}", values),
            CommandOption::Command(c) => {
                write!(f, "{{ type = \"command\", execute = {:?} }}", c.execute)
            }
            CommandOption::File(file) => {
                write!(f, "{{ type = \"file\", base_path = {:?} }}", file.base_path)
            }
        }
    }
}

/// Untagged enum covering every accepted option shape in the configuration
#[derive(Debug, Deserialize)]
#[serde(
    untagged,
    expecting = "unknown option type, expected a string, a list of strings, or a table with type = \"command\" or type = \"file\""
)]
enum OptionFormat {
    Str(String),
    List(Vec<String>),
    Dynamic(DynamicOption),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum DynamicOption {
    Command(CommandDescriptor),
    File(FileDescriptor),
}

impl From<OptionFormat> for CommandOption {
    fn from(format: OptionFormat) -> Self {
        match format {
            OptionFormat::Str(value) => CommandOption::Str(value),
            OptionFormat::List(values) => CommandOption::List(values),
            OptionFormat::Dynamic(DynamicOption::Command(c)) => CommandOption::Command(c),
            OptionFormat::Dynamic(DynamicOption::File(f)) => CommandOption::File(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        option: CommandOption,
    }

    fn parse(content: &str) -> CommandOption {
        toml::from_str::<Holder>(content)
            .expect("Failed to parse TOML")
            .option
    }

    #[test]
    fn test_string_option() {
        assert_eq!(parse(r#"option = "foo""#), CommandOption::Str("foo".into()));
    }

    #[test]
    fn test_list_option() {
        assert_eq!(
            parse(r#"option = ["a", "b"]"#),
            CommandOption::List(vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn test_command_option() {
        assert_eq!(
            parse(r#"option = { type = "command", execute = "ls -1" }"#),
            CommandOption::command("ls -1")
        );
    }

    #[test]
    fn test_file_option() {
        assert_eq!(
            parse(
                r#"
                [option]
                type = "file"
                base_path = "/etc"
                "#
            ),
            CommandOption::file("/etc")
        );
    }

    #[test]
    fn test_unknown_option_type_is_rejected() {
        let err = toml::from_str::<Holder>(r#"option = { type = "url", href = "x" }"#).unwrap_err();
        assert!(err.to_string().contains("unknown option type"));
    }

    #[test]
    fn test_non_string_option_is_rejected() {
        assert!(toml::from_str::<Holder>("option = 42").is_err());
        assert!(toml::from_str::<Holder>("option = [1, 2]").is_err());
    }

    #[test]
    fn test_is_empty() {
        assert!(CommandOption::List(vec![]).is_empty());
        assert!(!CommandOption::Str(String::new()).is_empty());
        assert!(!CommandOption::Str("x".into()).is_empty());
        assert!(!CommandOption::List(vec!["x".into()]).is_empty());
        assert!(!CommandOption::command("").is_empty());
        assert!(!CommandOption::file("").is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(CommandOption::Str("foo".into()).to_string(), r#""foo""#);
        assert_eq!(
            CommandOption::List(vec!["a".into()]).to_string(),
            r#"["a"]"#
        );
        assert_eq!(
            CommandOption::command("ls").to_string(),
            r#"{ type = "command", execute = "ls" }"#
        );
        assert_eq!(
            CommandOption::file("/etc").to_string(),
            r#"{ type = "file", base_path = "/etc" }"#
        );
    }
}

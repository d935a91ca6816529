use miette::Diagnostic;
use thiserror::Error;

use crate::{CommandOption, SubcommandName};

/// Result type for cmdcomp-core operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(
        "'option' and 'subcommands' cannot be used at the same time{}\n    'option': {}\n    'subcommands': [{}]",
        location(.path),
        .option,
        join_names(.subcommands)
    )]
    #[diagnostic(
        code(cmdcomp::subcommand_define),
        help("a subcommand either completes its own option or routes to subcommands, remove one of them")
    )]
    SubcommandDefine {
        /// Dotted path to the offending node, empty for a detached node
        path: String,
        option: CommandOption,
        subcommands: Vec<SubcommandName>,
    },
}

impl Error {
    /// Create a definition conflict error
    pub fn subcommand_define<'a>(
        path: impl Into<String>,
        option: &CommandOption,
        subcommands: impl IntoIterator<Item = &'a SubcommandName>,
    ) -> Box<Self> {
        Box::new(Error::SubcommandDefine {
            path: path.into(),
            option: option.clone(),
            subcommands: subcommands.into_iter().cloned().collect(),
        })
    }
}

fn location(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" in '{}'", path)
    }
}

fn join_names(names: &[SubcommandName]) -> String {
    names
        .iter()
        .map(|name| format!("'{}'", name))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subcommand_define_message() {
        let names = [SubcommandName::from("start"), SubcommandName::from("stop")];
        let err = Error::subcommand_define("app.db", &CommandOption::Str("foo".into()), &names);

        assert_eq!(
            err.to_string(),
            "'option' and 'subcommands' cannot be used at the same time in 'app.db'\n    'option': \"foo\"\n    'subcommands': ['start', 'stop']"
        );
    }

    #[test]
    fn test_subcommand_define_message_without_path() {
        let names = [SubcommandName::from("start")];
        let err = Error::subcommand_define("", &CommandOption::file("/etc"), &names);

        assert!(
            err.to_string()
                .starts_with("'option' and 'subcommands' cannot be used at the same time\n")
        );
    }
}

use tracing::debug;

use crate::{Candidate, Candidates, CommandOption, Subcommands};

/// Resolve the completion candidates of a node from its option and subcommands.
///
/// Order is exactly the insertion order of `subcommands`, with each child's
/// name before its aliases. Nothing is sorted or deduplicated.
pub fn resolve(subcommands: &Subcommands, option: Option<&CommandOption>) -> Candidates {
    let candidates = match option {
        None => subcommand_targets(subcommands),
        Some(CommandOption::Str(value)) => vec![Candidate::token(value.as_str())],
        // A list option resolves through the subcommands, not through its own items.
        Some(CommandOption::List(_)) => subcommand_targets(subcommands),
        Some(CommandOption::Command(command)) => vec![Candidate::command(command.execute.as_str())],
        Some(CommandOption::File(file)) => vec![Candidate::file(file.base_path.as_str())],
    };

    debug!(
        option = option.map(CommandOption::kind).unwrap_or("none"),
        subcommands = subcommands.len(),
        candidates = candidates.len(),
        "resolved candidates"
    );
    candidates
}

fn subcommand_targets(subcommands: &Subcommands) -> Candidates {
    subcommands
        .iter()
        .flat_map(|(name, subcommand)| subcommand.targets(name))
        .map(Candidate::Token)
        .collect()
}

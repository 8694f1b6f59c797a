//! Command-line definition.

use clap::{Parser, Subcommand, ValueEnum};
use leetpick::config::{DEFAULT_DATASET, DEFAULT_STATE};
use leetpick::models::ProblemId;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "leetpick",
    version,
    about = "Randomly pick LeetCode problems from a problem bank without repeating completed problems.",
    after_help = "The problem bank is initialized with the full list of problems loaded from the \
                  dataset. Problems marked complete are removed from the problem bank until they \
                  are unmarked or until you run `reset`."
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = format!("Path to dataset JSON [env: LEETPICK_DATASET] (default: {DEFAULT_DATASET})")
    )]
    pub dataset: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = format!("Path to state file [env: LEETPICK_STATE] (default: {DEFAULT_STATE})")
    )]
    pub state: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pick random incomplete problems
    #[command(alias = "p")]
    Pick {
        /// How many distinct problems to suggest
        #[arg(long, short = 'n', default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
    },
    /// Show progress
    #[command(alias = "s")]
    Status,
    /// Toggle completion for a problem
    #[command(alias = "t")]
    Toggle {
        /// LeetCode problem number to toggle completion for
        problem_id: ProblemId,
    },
    /// Schedule a reminder to revisit a problem
    #[command(alias = "r")]
    Remind {
        problem_id: ProblemId,
        /// Days from now until the reminder is due (0 = now)
        #[arg(long, default_value_t = 7)]
        days: u32,
    },
    /// List completed problems or scheduled reminders
    #[command(alias = "ls")]
    List {
        #[arg(value_enum)]
        what: ListKind,
    },
    /// Reset all progress
    #[command(long_about = "Unmark completion for all problems so they can be picked again.")]
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    Completed,
    Reminders,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_pick_count() {
        let cli = Cli::try_parse_from(["leetpick", "pick", "--count", "3"]).unwrap();
        assert!(matches!(cli.command, Command::Pick { count: 3 }));
    }

    #[test]
    fn test_pick_count_must_be_positive() {
        assert!(Cli::try_parse_from(["leetpick", "pick", "--count", "0"]).is_err());
    }

    #[test]
    fn test_global_paths_after_subcommand() {
        let cli =
            Cli::try_parse_from(["leetpick", "status", "--state", "s.json", "--dataset", "d.json"])
                .unwrap();
        assert_eq!(cli.state, Some(PathBuf::from("s.json")));
        assert_eq!(cli.dataset, Some(PathBuf::from("d.json")));
    }

    #[test]
    fn test_parse_remind_defaults() {
        let cli = Cli::try_parse_from(["leetpick", "remind", "42"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Remind {
                problem_id: 42,
                days: 7
            }
        ));
    }

    #[test]
    fn test_parse_list_kind() {
        let cli = Cli::try_parse_from(["leetpick", "list", "reminders"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::List {
                what: ListKind::Reminders
            }
        ));
        assert!(Cli::try_parse_from(["leetpick", "list", "everything"]).is_err());
    }
}

//! Command-line and environment configuration.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::ai::client::DEFAULT_MODEL;
use crate::history::Locator;

#[derive(Parser, Debug)]
#[command(name = "godex")]
#[command(about = "Summarize what your shell history says you were doing today")]
#[command(version)]
pub struct Cli {
    /// Explicit history file; ignored if it does not exist
    #[arg(long, global = true, env = "HISTFILE")]
    pub history_file: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Model used for every AI stage
    #[arg(long, global = true, env = "GODEX_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Summarize today's commands with AI (default)
    Summary,

    /// Print today's timestamped commands
    Today,

    /// Print timestamped commands from one local calendar day
    Day {
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
    },

    /// Print the most recent commands, oldest first
    Recent {
        /// Number of commands to show
        #[arg(long, short = 'n', default_value = "20")]
        count: usize,
    },

    /// Print the resolved history file path
    Locate,
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Summary)
    }

    /// Locator using the configured override and the user's home directory.
    pub fn locator(&self) -> Locator {
        Locator::new(self.history_file.clone(), dirs::home_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_summary() {
        let cli = Cli::try_parse_from(["godex"]).unwrap();
        assert_eq!(cli.command(), Commands::Summary);
        assert!(!cli.json);
    }

    #[test]
    fn test_recent_count() {
        let cli = Cli::try_parse_from(["godex", "recent", "-n", "5", "--json"]).unwrap();
        assert_eq!(cli.command(), Commands::Recent { count: 5 });
        assert!(cli.json);
    }

    #[test]
    fn test_day_parses_date() {
        let cli = Cli::try_parse_from(["godex", "day", "--date", "2024-02-29"]).unwrap();
        assert_eq!(
            cli.command(),
            Commands::Day {
                date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
            }
        );
    }

    #[test]
    fn test_day_rejects_bad_date() {
        assert!(Cli::try_parse_from(["godex", "day", "--date", "2024-13-01"]).is_err());
    }

    #[test]
    fn test_history_file_flag() {
        let cli = Cli::try_parse_from(["godex", "--history-file", "/tmp/h", "today"]).unwrap();
        assert_eq!(cli.history_file, Some(PathBuf::from("/tmp/h")));
    }

    #[test]
    fn test_locator_uses_history_file_flag() {
        let dir = tempfile::tempdir().unwrap();
        let custom = dir.path().join("my_history");
        std::fs::write(&custom, "ls\n").unwrap();

        let cli = Cli::try_parse_from([
            "godex",
            "--history-file",
            custom.to_str().unwrap(),
            "recent",
        ])
        .unwrap();
        assert_eq!(cli.locator().locate().unwrap(), custom);
    }
}

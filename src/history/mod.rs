//! Shell history ingestion.
//!
//! This module finds the user's interactive-shell history file, decodes its
//! lines (plain bash style and zsh extended style) into [`Entry`] records,
//! and answers the two views the rest of the application consumes: the most
//! recent N commands and every command issued on one calendar day.

mod decode;
mod error;
mod locate;
mod query;

use chrono::{DateTime, Local, TimeZone};

pub use decode::{decode_line, Decoded};
pub use error::{HistoryError, Result};
pub use locate::{Locator, HISTFILE_ENV};
pub use query::{daily_entries, latest_commands};

/// One decoded history line.
///
/// `command` is never empty; `timestamp` is only present for extended-form
/// lines whose metadata carried a parsable epoch.
#[derive(Clone, Debug)]
pub struct Entry<Tz: TimeZone = Local> {
    pub timestamp: Option<DateTime<Tz>>,
    pub command: String,
}

impl<Tz: TimeZone> Entry<Tz> {
    /// Create an entry with no timestamp.
    pub fn plain(command: impl Into<String>) -> Self {
        Self {
            timestamp: None,
            command: command.into(),
        }
    }
}

impl<Tz: TimeZone> PartialEq for Entry<Tz> {
    fn eq(&self, other: &Self) -> bool {
        self.timestamp == other.timestamp && self.command == other.command
    }
}

//! Godex - shell history insights
//!
//! This library provides the core functionality for godex, including:
//! - Locating and decoding bash and zsh extended history files
//! - The "most recent N commands" and "commands on one day" views
//! - An AI pipeline that summarizes a day of commands
//! - Console rendering of the above
//!
//! # Example
//!
//! ```no_run
//! use chrono::Local;
//! use godex::history::{daily_entries, latest_commands, Locator};
//!
//! fn main() -> anyhow::Result<()> {
//!     let path = Locator::from_env().locate()?;
//!
//!     for command in latest_commands(&path, 10)? {
//!         println!("{}", command);
//!     }
//!
//!     let today = Local::now().date_naive();
//!     for entry in daily_entries(&path, today, &Local)? {
//!         println!("{:?} {}", entry.timestamp, entry.command);
//!     }
//!     Ok(())
//! }
//! ```

pub mod ai;
pub mod config;
pub mod history;
pub mod report;
pub mod utils;

// Re-export commonly used types
pub use ai::{generate_insights, AiClient, DailyInsights};
pub use history::{Entry, HistoryError, Locator};

//! The two read-only views over a history file.
//!
//! Each call opens the file, decodes it in a single pass in file order, and
//! drops the handle before returning. Nothing is cached between calls.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::{Datelike, Local, NaiveDate, TimeZone};
use tracing::debug;

use super::decode::decode_line;
use super::error::{HistoryError, Result};
use super::Entry;

/// Return up to `count` commands, oldest first, most recent last.
///
/// Timestamps are irrelevant to this view; the local zone is used for
/// decoding. `count == 0` yields an empty list without touching the file.
pub fn latest_commands(path: &Path, count: usize) -> Result<Vec<String>> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let entries = scan(path, &Local)?;

    let mut commands: Vec<String> = entries
        .into_iter()
        .rev()
        .map(|entry| entry.command)
        .filter(|command| !command.is_empty())
        .take(count)
        .collect();
    commands.reverse();

    debug!(
        "Collected {} of {} requested commands from {}",
        commands.len(),
        count,
        path.display()
    );
    Ok(commands)
}

/// Return every timestamped entry whose date in `tz` equals `day`.
///
/// Results keep file order. History files are append-only in practice, so
/// file order is treated as chronological; out-of-order files are not
/// re-sorted.
pub fn daily_entries<Tz: TimeZone>(path: &Path, day: NaiveDate, tz: &Tz) -> Result<Vec<Entry<Tz>>> {
    let entries: Vec<Entry<Tz>> = scan(path, tz)?
        .into_iter()
        .filter(|entry| {
            entry.timestamp.as_ref().is_some_and(|ts| {
                ts.year() == day.year() && ts.month() == day.month() && ts.day() == day.day()
            })
        })
        .collect();

    debug!(
        "Found {} entries for {} in {}",
        entries.len(),
        day,
        path.display()
    );
    Ok(entries)
}

/// Decode the whole file in order. Any I/O failure aborts with no partial
/// result; malformed lines are skipped.
fn scan<Tz: TimeZone>(path: &Path, tz: &Tz) -> Result<Vec<Entry<Tz>>> {
    let file = File::open(path).map_err(|source| HistoryError::FileOpenFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    let mut skipped = 0usize;

    // Split on raw bytes: zsh can write non-UTF-8 bytes that must not abort
    // the scan.
    for chunk in BufReader::new(file).split(b'\n') {
        let bytes = chunk.map_err(|source| HistoryError::FileScanFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let line = String::from_utf8_lossy(&bytes);
        match decode_line(&line, tz).into_entry() {
            Some(entry) => entries.push(entry),
            None => skipped += 1,
        }
    }

    debug!(
        "Decoded {} entries ({} lines skipped) from {}",
        entries.len(),
        skipped,
        path.display()
    );
    Ok(entries)
}

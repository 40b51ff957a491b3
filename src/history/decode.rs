//! Line decoding for plain and extended history formats.
//!
//! Plain (bash) lines are taken verbatim. Extended (zsh) lines look like
//! `: <epoch-seconds>:<elapsed>;<command>`.

use chrono::TimeZone;

use super::Entry;

/// Marker that introduces an extended-form line.
const EXTENDED_MARKER: &str = ": ";

/// Outcome of decoding a single raw line.
#[derive(Clone, Debug, PartialEq)]
pub enum Decoded<Tz: TimeZone> {
    Entry(Entry<Tz>),
    /// Blank or malformed; not an error.
    Skipped,
}

impl<Tz: TimeZone> Decoded<Tz> {
    pub fn into_entry(self) -> Option<Entry<Tz>> {
        match self {
            Decoded::Entry(entry) => Some(entry),
            Decoded::Skipped => None,
        }
    }
}

/// Decode one raw history line, resolving timestamps into `tz`.
pub fn decode_line<Tz: TimeZone>(raw: &str, tz: &Tz) -> Decoded<Tz> {
    let line = raw.trim();
    if line.is_empty() {
        return Decoded::Skipped;
    }

    match line.strip_prefix(EXTENDED_MARKER) {
        Some(rest) => decode_extended(rest, tz),
        None => Decoded::Entry(Entry::plain(line)),
    }
}

fn decode_extended<Tz: TimeZone>(rest: &str, tz: &Tz) -> Decoded<Tz> {
    let Some((meta, command)) = rest.split_once(';') else {
        return Decoded::Skipped;
    };

    let command = command.trim();
    if command.is_empty() {
        return Decoded::Skipped;
    }

    // A bad epoch only drops the timestamp, the command is still kept.
    let timestamp = meta
        .split_once(':')
        .and_then(|(epoch, _)| epoch.parse::<i64>().ok())
        .and_then(|secs| tz.timestamp_opt(secs, 0).single());

    Decoded::Entry(Entry {
        timestamp,
        command: command.to_string(),
    })
}

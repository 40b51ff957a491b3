//! Console rendering for history views and insights.

use anyhow::{Context as _, Result};
use chrono::TimeZone;
use serde::Serialize;

use crate::ai::DailyInsights;
use crate::history::Entry;

/// Serializable form of an [`Entry`].
#[derive(Debug, Clone, Serialize)]
pub struct EntryRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub command: String,
}

impl<Tz: TimeZone> From<&Entry<Tz>> for EntryRecord
where
    Tz::Offset: std::fmt::Display,
{
    fn from(entry: &Entry<Tz>) -> Self {
        Self {
            timestamp: entry.timestamp.as_ref().map(|ts| ts.to_rfc3339()),
            command: entry.command.clone(),
        }
    }
}

/// One command per line.
pub fn render_commands(commands: &[String], json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(commands).context("Failed to serialize commands");
    }
    Ok(commands.iter().map(|c| format!("{}\n", c)).collect())
}

/// `[HH:MM:SS] command` per line.
pub fn render_entries<Tz: TimeZone>(entries: &[Entry<Tz>], json: bool) -> Result<String>
where
    Tz::Offset: std::fmt::Display,
{
    if json {
        let records: Vec<EntryRecord> = entries.iter().map(EntryRecord::from).collect();
        return serde_json::to_string_pretty(&records).context("Failed to serialize entries");
    }

    let mut out = String::new();
    for entry in entries {
        match &entry.timestamp {
            Some(ts) => out.push_str(&format!("[{}] {}\n", ts.format("%H:%M:%S"), entry.command)),
            None => out.push_str(&format!("{}\n", entry.command)),
        }
    }
    Ok(out)
}

pub fn render_insights(insights: &DailyInsights, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(insights).context("Failed to serialize insights");
    }

    let mut out = format!("\n\nToday's intent summary:\n{}\n", insights.summary);
    if !insights.suggestions.is_empty() {
        out.push_str(&format!("\n\nImprovement ideas:\n{}\n", insights.suggestions));
    }
    if !insights.web_findings.is_empty() {
        out.push_str(&format!("\n\nWeb discoveries:\n{}\n", insights.web_findings));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample() -> Vec<Entry<Utc>> {
        vec![
            Entry {
                timestamp: Utc.timestamp_opt(1_700_000_000, 0).single(),
                command: "git status".to_string(),
            },
            Entry::plain("ls"),
        ]
    }

    #[test]
    fn test_render_entries_text() {
        let out = render_entries(&sample(), false).unwrap();
        assert_eq!(out, "[22:13:20] git status\nls\n");
    }

    #[test]
    fn test_render_entries_json() {
        let out = render_entries(&sample(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["command"], "git status");
        assert_eq!(value[0]["timestamp"], "2023-11-14T22:13:20+00:00");
        assert!(value[1].get("timestamp").is_none());
    }

    #[test]
    fn test_render_commands() {
        let commands = vec!["a".to_string(), "b".to_string()];
        assert_eq!(render_commands(&commands, false).unwrap(), "a\nb\n");
        assert_eq!(render_commands(&[], false).unwrap(), "");
        let rendered = render_commands(&commands, true).unwrap();
        let json: Vec<String> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json, commands);
    }

    #[test]
    fn test_render_insights_skips_empty_sections() {
        let insights = DailyInsights {
            summary: "goals".to_string(),
            suggestions: String::new(),
            web_findings: "found".to_string(),
        };
        let out = render_insights(&insights, false).unwrap();
        assert!(out.contains("Today's intent summary:\ngoals"));
        assert!(!out.contains("Improvement ideas"));
        assert!(out.contains("Web discoveries:\nfound"));
    }
}

//! Prompt building for the daily insight pipeline.
//!
//! Each stage gets its own prompt: the first sees the raw commands, the later
//! ones only see what earlier stages produced.

use chrono::TimeZone;

use crate::history::Entry;

/// Build the prompt asking for the user's intents behind today's commands.
pub fn build_intent_summary_prompt<Tz: TimeZone>(entries: &[Entry<Tz>]) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut prompt = String::new();

    prompt.push_str(
        "You are observing a user's shell activity. Summarize, in at least three concise bullet \
         points, the primary intents these commands suggest. Focus on the user's high-level goals. \
         For each bullet, append parentheses that cite representative commands, generalized to \
         their base command (e.g., `git status` -> `git`).\n\n",
    );

    prompt.push_str("Today's commands (chronological):\n");
    for entry in entries {
        let time = entry
            .timestamp
            .as_ref()
            .map(|ts| ts.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "--:--:--".to_string());
        prompt.push_str(&format!("- [{}] {}\n", time, entry.command));
    }

    prompt.push_str(
        "\nOutput exactly 2-3 bullet points capturing the likely goals, each ending with the \
         required supporting commands in parentheses.",
    );
    prompt
}

/// Build the prompt asking for faster ways to reach the summarized goals.
pub fn build_optimization_prompt(summary: &str) -> String {
    format!(
        "You previously summarized the user's likely goals from today's shell commands as follows:\n\
         {summary}\n\n\
         Based on those goals, propose faster or more effective ways the user could accomplish them. \
         Provide 3-5 practical, actionable suggestions. Each bullet should recommend a concrete \
         improvement and may cover any relevant workflow enhancements. Avoid restating the original \
         commands; focus on forward-looking recommendations.",
        summary = summary
    )
}

/// Build the prompt for the web research stage.
pub fn build_web_search_prompt(summary: &str, suggestions: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str("The user's goals have been summarized as:\n");
    prompt.push_str(summary);

    if !suggestions.is_empty() {
        prompt.push_str("\n\nPrevious recommendations already provided:\n");
        prompt.push_str(suggestions);
    }

    prompt.push_str(
        "\n\nUse web search to uncover interesting, unique, or unconventional ways to achieve these \
         goals. Focus on additions or alternatives beyond the earlier recommendations. Return 2-3 \
         bullet points, each highlighting what makes the approach distinctive and include the \
         source domain in parentheses (e.g., source: example.com).",
    );
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_build_intent_summary_prompt() {
        let entries = vec![
            Entry {
                timestamp: Utc.timestamp_opt(1_700_000_000, 0).single(),
                command: "git status".to_string(),
            },
            Entry {
                timestamp: Utc.timestamp_opt(1_700_000_065, 0).single(),
                command: "cargo test".to_string(),
            },
        ];

        let prompt = build_intent_summary_prompt(&entries);

        assert!(prompt.contains("Today's commands (chronological):"));
        assert!(prompt.contains("- [22:13:20] git status\n"));
        assert!(prompt.contains("- [22:14:25] cargo test\n"));
        let first = prompt.find("git status").unwrap();
        let second = prompt.find("cargo test").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_build_optimization_prompt() {
        let prompt = build_optimization_prompt("- ship the release (git)");
        assert!(prompt.contains("- ship the release (git)"));
        assert!(prompt.contains("3-5 practical"));
    }

    #[test]
    fn test_build_web_search_prompt_without_suggestions() {
        let prompt = build_web_search_prompt("goals", "");
        assert!(prompt.starts_with("The user's goals have been summarized as:\ngoals"));
        assert!(!prompt.contains("Previous recommendations"));
    }

    #[test]
    fn test_build_web_search_prompt_with_suggestions() {
        let prompt = build_web_search_prompt("goals", "use aliases");
        assert!(prompt.contains("Previous recommendations already provided:\nuse aliases"));
        assert!(prompt.contains("source: example.com"));
    }
}

//! Daily insight pipeline.
//!
//! Three chained completions over one day of history: an intent summary,
//! workflow improvement ideas, and web research on alternatives.

use anyhow::{Context as _, Result};
use chrono::TimeZone;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::history::Entry;

use super::prompt;

/// Which kind of model a completion needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
    Reasoning,
    WebSearch,
}

/// Anything that can turn a prompt into text.
#[allow(async_fn_in_trait)]
pub trait TextCompleter {
    async fn complete(&self, kind: CompletionKind, prompt: &str) -> Result<String>;
}

/// Output of the pipeline. `suggestions` and `web_findings` may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyInsights {
    pub summary: String,
    pub suggestions: String,
    pub web_findings: String,
}

/// Run all three stages over `entries`.
///
/// Returns `None` when there is nothing to summarize or the summary comes
/// back empty; later stages are not run in that case.
pub async fn generate_insights<C, Tz>(
    completer: &C,
    entries: &[Entry<Tz>],
) -> Result<Option<DailyInsights>>
where
    C: TextCompleter,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if entries.is_empty() {
        return Ok(None);
    }

    info!("Summarizing {} commands", entries.len());
    let summary_prompt = prompt::build_intent_summary_prompt(entries);
    let summary = completer
        .complete(CompletionKind::Reasoning, &summary_prompt)
        .await
        .context("summarize intents")?
        .trim()
        .to_string();
    if summary.is_empty() {
        return Ok(None);
    }

    info!("Requesting workflow improvements");
    let suggestions = completer
        .complete(
            CompletionKind::Reasoning,
            &prompt::build_optimization_prompt(&summary),
        )
        .await
        .context("optimize workflow")?
        .trim()
        .to_string();

    info!("Researching alternatives with web search");
    let web_findings = completer
        .complete(
            CompletionKind::WebSearch,
            &prompt::build_web_search_prompt(&summary, &suggestions),
        )
        .await
        .context("research with web search")?
        .trim()
        .to_string();

    Ok(Some(DailyInsights {
        summary,
        suggestions,
        web_findings,
    }))
}

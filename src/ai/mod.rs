//! AI module for turning a day of shell history into insights.
//!
//! This module wraps the OpenAI client, builds the stage prompts, and chains
//! them into the daily insight pipeline.

pub mod client;
pub mod insights;
pub mod prompt;

pub use client::AiClient;
pub use insights::{generate_insights, CompletionKind, DailyInsights, TextCompleter};

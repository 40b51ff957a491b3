use anyhow::{Context as _, Result};
use async_openai::types::responses::{
    Content, CreateResponseArgs, HostedToolType, Input, OutputContent, ToolChoice,
    ToolDefinition, WebSearchPreview,
};
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::{Client, config::OpenAIConfig};
use tracing::debug;

use super::insights::{CompletionKind, TextCompleter};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Thin wrapper around the OpenAI API.
///
/// Credentials come from `OPENAI_API_KEY` through async-openai's defaults.
pub struct AiClient {
    client: Client<OpenAIConfig>,
    pub model: String,
}

impl AiClient {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            model: model.into(),
        }
    }

    /// Plain chat completion; returns the first choice's text.
    async fn chat(&self, prompt: &str) -> Result<String> {
        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .context("Failed to build message")?;
        let messages: Vec<ChatCompletionRequestMessage> = vec![user_msg.into()];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .build()
            .context("Failed to build request")?;

        debug!("Sending {} byte prompt to {}", prompt.len(), self.model);
        let response = self
            .client
            .chat()
            .create(request)
            .await
            .with_context(|| format!("Request to {} failed", self.model))?;

        Ok(response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }

    /// Responses API call with the hosted web search tool forced on.
    async fn web_search(&self, prompt: &str) -> Result<String> {
        let request = CreateResponseArgs::default()
            .model(&self.model)
            .input(Input::Text(prompt.to_string()))
            .tools(vec![ToolDefinition::WebSearchPreview(WebSearchPreview::default())])
            .tool_choice(ToolChoice::Hosted {
                kind: HostedToolType::WebSearchPreview,
            })
            .build()
            .context("Failed to build web search request")?;

        debug!("Sending {} byte web search prompt to {}", prompt.len(), self.model);
        let response = self
            .client
            .responses()
            .create(request)
            .await
            .with_context(|| format!("Web search request to {} failed", self.model))?;

        Ok(output_text(&response.output))
    }
}

impl TextCompleter for AiClient {
    async fn complete(&self, kind: CompletionKind, prompt: &str) -> Result<String> {
        let text = match kind {
            CompletionKind::Reasoning => self.chat(prompt).await?,
            CompletionKind::WebSearch => self.web_search(prompt).await?,
        };
        Ok(text.trim().to_string())
    }
}

/// Concatenate every `output_text` part of the message items, skipping tool
/// call records and refusals.
fn output_text(output: &[OutputContent]) -> String {
    output
        .iter()
        .filter_map(|item| match item {
            OutputContent::Message(message) => Some(&message.content),
            _ => None,
        })
        .flatten()
        .filter_map(|content| match content {
            Content::OutputText(text) => Some(text.text.as_str()),
            Content::Refusal(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_text_skips_tool_calls() {
        let output: Vec<OutputContent> = serde_json::from_value(serde_json::json!([
            { "type": "web_search_call", "id": "ws_1", "status": "completed" },
            {
                "type": "message",
                "id": "msg_1",
                "role": "assistant",
                "status": "completed",
                "content": [
                    { "type": "output_text", "text": "- try zoxide ", "annotations": [] },
                    { "type": "output_text", "text": "(source: github.com)", "annotations": [] }
                ]
            }
        ]))
        .unwrap();

        assert_eq!(output_text(&output), "- try zoxide (source: github.com)");
    }

    #[test]
    fn test_output_text_ignores_refusals() {
        let output: Vec<OutputContent> = serde_json::from_value(serde_json::json!([
            {
                "type": "message",
                "id": "msg_1",
                "role": "assistant",
                "status": "completed",
                "content": [{ "type": "refusal", "refusal": "no" }]
            }
        ]))
        .unwrap();

        assert_eq!(output_text(&output), "");
    }
}

use serde::{Deserialize, Serialize};

use crate::types::Role;

/// One message produced by the completion service.
///
/// `content` may be absent or null on the wire (refusals, tool calls);
/// callers treat that the same as no completion at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletionMessage {
    /// The role the service attributed to the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    /// The text of the message.
    #[serde(default)]
    pub content: Option<String>,
}

/// One completion choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletionChoice {
    /// The message for this choice.
    pub message: CompletionMessage,
}

/// Token accounting reported by the completion service.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletionUsage {
    /// Tokens consumed by the prompt.
    #[serde(default)]
    pub prompt_tokens: u64,

    /// Tokens generated in the completion.
    #[serde(default)]
    pub completion_tokens: u64,

    /// Prompt plus completion tokens.
    #[serde(default)]
    pub total_tokens: u64,
}

/// Response body from the completion service's chat endpoint.
///
/// Only the first choice's message text is used as the reply; the rest of
/// the payload is kept for operator logging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletionResponse {
    /// The produced completions, best first.
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,

    /// The model that served the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Token accounting, when the service reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<CompletionUsage>,
}

impl CompletionResponse {
    /// Returns the first completion's text, if one was produced.
    pub fn first_text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

//! Reply providers.
//!
//! A reply provider turns a user message, plus the prior turn history,
//! into a single reply string. Three interchangeable implementations:
//!
//! - [`RemoteProvider`] delegates to the external completion service
//!   (this is what the backend serves).
//! - [`BackendProvider`] posts to a WarmBridge backend over HTTP (this is
//!   what a live chat client uses; no API key ever leaves the client).
//! - [`MockProvider`] answers locally from the keyword rules, with no
//!   network and no side effects.
//!
//! Providers never retry. Any failure is returned as an error for the
//! caller to convert into its fixed fallback text.

use url::Url;

use crate::client::Completions;
use crate::error::{Error, Result};
use crate::mock;
use crate::observability;
use crate::types::{BridgeReply, BridgeRequest, CompletionRequest, Turn};

/// The fixed system instruction sent ahead of every remote conversation.
pub const SYSTEM_INSTRUCTION: &str = "You are WarmBridge, a gentle assistant for illiterate and digitally-limited users. Use simple language, short sentences, and step-by-step guidance.";

/// Default model for the remote provider.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Substituted when the backend answers success with an empty reply.
pub const MISSING_REPLY_TEXT: &str = "Sorry, I could not get a proper reply from the server.";

/// The component that turns a user message into a reply string.
#[async_trait::async_trait]
pub trait ReplyProvider: Send + Sync {
    /// Produce a reply to `message` given the prior `history`.
    ///
    /// `message` is expected to be non-empty; enforcing that is the
    /// caller's job. `history` may be empty.
    async fn reply(&self, message: &str, history: &[Turn]) -> Result<String>;
}

/// Builds the completion prompt: system instruction, prior history, then
/// the new user turn.
fn prompt_turns(message: &str, history: &[Turn]) -> Vec<Turn> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(Turn::system(SYSTEM_INSTRUCTION));
    messages.extend_from_slice(history);
    messages.push(Turn::user(message));
    messages
}

/// Provider that calls the external completion service.
#[derive(Debug, Clone)]
pub struct RemoteProvider {
    client: Completions,
    model: String,
}

impl RemoteProvider {
    /// Create a remote provider with the default model.
    pub fn new(client: Completions) -> Self {
        Self::with_model(client, DEFAULT_MODEL)
    }

    /// Create a remote provider with a custom model.
    pub fn with_model(client: Completions, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait::async_trait]
impl ReplyProvider for RemoteProvider {
    async fn reply(&self, message: &str, history: &[Turn]) -> Result<String> {
        let params = CompletionRequest::new(self.model.clone(), prompt_turns(message, history));
        let response = self.client.complete(params).await?;
        match response.first_text() {
            Some(text) => Ok(text.to_string()),
            None => Err(Error::empty_completion(
                "completion service produced no reply text",
            )),
        }
    }
}

/// Provider that answers locally from the keyword rules.
///
/// # Example
///
/// ```
/// use warmbridge::{MockProvider, ReplyProvider};
///
/// # tokio_test::block_on(async {
/// let provider = MockProvider::new();
/// let reply = provider.reply("someone asked for my bank otp", &[]).await.unwrap();
/// assert!(reply.starts_with("Step 1: Do not share your OTP"));
/// # })
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MockProvider;

impl MockProvider {
    /// Create a mock provider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ReplyProvider for MockProvider {
    async fn reply(&self, message: &str, _history: &[Turn]) -> Result<String> {
        Ok(mock::mock_reply(message).to_string())
    }
}

/// Provider that posts to a WarmBridge backend endpoint.
#[derive(Debug, Clone)]
pub struct BackendProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl BackendProvider {
    /// Create a provider that posts to the given endpoint URL.
    ///
    /// The URL is validated up front. Calls carry no timeout: they wait
    /// for a response or an error.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        Url::parse(&endpoint)?;
        let client = reqwest::Client::builder().build().map_err(|e| {
            Error::http_client(
                format!("Failed to build HTTP client: {}", e),
                Some(Box::new(e)),
            )
        })?;
        Ok(Self { client, endpoint })
    }

    /// The endpoint this provider posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl ReplyProvider for BackendProvider {
    async fn reply(&self, message: &str, history: &[Turn]) -> Result<String> {
        observability::BACKEND_REQUESTS.click();
        let body = BridgeRequest::new(message, history.to_vec());

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                observability::BACKEND_REQUEST_ERRORS.click();
                if e.is_connect() {
                    Error::connection(format!("Connection error: {}", e), Some(Box::new(e)))
                } else {
                    Error::http_client(format!("Request failed: {}", e), Some(Box::new(e)))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            observability::BACKEND_REQUEST_ERRORS.click();
            return Err(Error::api(
                status.as_u16(),
                None,
                format!("Backend error: {}", status.as_u16()),
                None,
            ));
        }

        let reply: BridgeReply = response.json().await.map_err(|e| {
            observability::BACKEND_REQUEST_ERRORS.click();
            Error::serialization(
                format!("Failed to parse reply: {}", e),
                Some(Box::new(e)),
            )
        })?;

        if reply.reply.is_empty() {
            Ok(MISSING_REPLY_TEXT.to_string())
        } else {
            Ok(reply.reply)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    #[test]
    fn prompt_carries_instruction_history_and_message() {
        let history = vec![Turn::user("hello"), Turn::assistant("Step 1: ...")];
        let turns = prompt_turns("what now", &history);

        assert_eq!(turns.len(), 4);
        assert_eq!(turns[0].role, Role::System);
        assert_eq!(turns[0].content, SYSTEM_INSTRUCTION);
        assert_eq!(turns[1], history[0]);
        assert_eq!(turns[2], history[1]);
        assert_eq!(turns[3], Turn::user("what now"));
    }

    #[test]
    fn prompt_with_empty_history() {
        let turns = prompt_turns("first message", &[]);
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, Role::System);
        assert_eq!(turns[1].role, Role::User);
    }

    #[tokio::test]
    async fn mock_provider_ignores_history() {
        let provider = MockProvider::new();
        let history = vec![Turn::user("my bank otp"), Turn::assistant("Step 1: ...")];
        let reply = provider.reply("hello there", &history).await.unwrap();
        assert!(reply.starts_with("Step 1: Tell me clearly what you need help with."));
    }

    #[tokio::test]
    async fn mock_provider_is_object_safe() {
        let provider: Box<dyn ReplyProvider> = Box::new(MockProvider::new());
        let reply = provider.reply("someone asked for my otp", &[]).await.unwrap();
        assert!(reply.starts_with("Step 1: Do not share your OTP"));
    }

    #[test]
    fn backend_provider_rejects_invalid_endpoint() {
        let err = BackendProvider::new("not a url").unwrap_err();
        assert!(matches!(err, Error::Url { .. }));
    }

    #[test]
    fn backend_provider_accepts_valid_endpoint() {
        let provider = BackendProvider::new("http://127.0.0.1:3000/api/warmbridge").unwrap();
        assert_eq!(provider.endpoint(), "http://127.0.0.1:3000/api/warmbridge");
    }
}

//! Core chat session management.
//!
//! This module provides the `ChatSession` struct which owns the
//! conversation history and drives each submission through its state
//! machine: trim and validate the input, render the user turn, wait on
//! the provider, then either append both turns or render the fixed
//! fallback and leave history untouched.

use crate::chat::config::{ChatConfig, ProviderMode};
use crate::observability;
use crate::provider::ReplyProvider;
use crate::render::Renderer;
use crate::types::Turn;

/// Fallback reply rendered when a provider fails.
pub const TECHNICAL_PROBLEM_REPLY: &str =
    "Sorry, I had a technical problem. Please try again in a moment.";

/// Greeting rendered when the chat starts. It never joins the history.
pub const WELCOME_TEXT: &str = "Hello. I am WarmBridge. I speak in simple steps to help with digital problems. Tell me what is worrying you or what you need help with.";

/// The session's position in the submission state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// Waiting for the next message.
    #[default]
    Ready,

    /// A submission is in flight.
    Thinking,

    /// The last submission ended in the fallback.
    Failed,
}

impl SessionStatus {
    /// The status line shown to the user.
    pub fn text(&self) -> &'static str {
        match self {
            SessionStatus::Ready => "Ready.",
            SessionStatus::Thinking => "Thinking...",
            SessionStatus::Failed => "Error. Please try again.",
        }
    }
}

/// What a call to [`ChatSession::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The input was empty after trimming; nothing happened.
    Ignored,

    /// The provider replied and both turns joined the history.
    Replied,

    /// The provider failed; the fallback was rendered and the history is
    /// unchanged.
    Failed,
}

/// A chat session that manages conversation state and provider calls.
///
/// The session maintains turn history and renders every visible effect
/// of a submission through the supplied renderer.
pub struct ChatSession {
    provider: Box<dyn ReplyProvider>,
    history: Vec<Turn>,
    status: SessionStatus,
    busy: bool,
    success_count: u64,
    failure_count: u64,
    config: ChatConfig,
}

/// Aggregated stats for a chat session.
#[derive(Debug, Clone)]
pub struct SessionStats {
    /// Which provider answers user messages.
    pub mode: ProviderMode,

    /// The number of messages in the conversation.
    pub message_count: usize,

    /// Submissions that produced a reply.
    pub successful_submissions: u64,

    /// Submissions that ended in the fallback.
    pub failed_submissions: u64,
}

impl ChatSession {
    /// Creates a new chat session with the given provider and configuration.
    pub fn new(provider: Box<dyn ReplyProvider>, config: ChatConfig) -> Self {
        Self {
            provider,
            history: Vec::new(),
            status: SessionStatus::Ready,
            busy: false,
            success_count: 0,
            failure_count: 0,
            config,
        }
    }

    /// Submits a user message and renders the exchange.
    ///
    /// This method:
    /// 1. Trims the input; empty input is silently ignored
    /// 2. Renders the user turn and the "Thinking..." status
    /// 3. Waits on the provider with the pre-submission history
    /// 4. On success, appends the user and assistant turns and renders
    ///    the reply
    /// 5. On failure, logs the error, renders the fixed fallback, and
    ///    leaves the history exactly as it was
    ///
    /// Provider failures are never retried and never surface as `Err`;
    /// the outcome says which path was taken.
    pub async fn submit(&mut self, input: &str, renderer: &mut dyn Renderer) -> SubmitOutcome {
        let text = input.trim();
        if text.is_empty() {
            return SubmitOutcome::Ignored;
        }

        observability::SESSION_SUBMISSIONS.click();
        renderer.print_user_turn(text);
        self.status = SessionStatus::Thinking;
        renderer.print_status(self.status.text());
        self.busy = true;

        let outcome = self.provider.reply(text, &self.history).await;
        self.busy = false;

        match outcome {
            Ok(reply) => {
                self.history.push(Turn::user(text));
                self.history.push(Turn::assistant(reply.clone()));
                self.success_count += 1;
                renderer.print_assistant_turn(&reply);
                self.status = SessionStatus::Ready;
                renderer.print_status(self.status.text());
                SubmitOutcome::Replied
            }
            Err(err) => {
                observability::SESSION_FAILURES.click();
                self.failure_count += 1;
                renderer.print_error(&err.to_string());
                renderer.print_assistant_turn(TECHNICAL_PROBLEM_REPLY);
                self.status = SessionStatus::Failed;
                renderer.print_status(self.status.text());
                SubmitOutcome::Failed
            }
        }
    }

    /// Clears the conversation history and returns the session to Ready.
    pub fn clear(&mut self) {
        self.history.clear();
        self.status = SessionStatus::Ready;
    }

    /// Returns the conversation history.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Returns the number of messages in the conversation.
    pub fn message_count(&self) -> usize {
        self.history.len()
    }

    /// Returns the session's current status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns true while a submission is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Returns the current session statistics snapshot.
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            mode: self.config.mode,
            message_count: self.message_count(),
            successful_submissions: self.success_count,
            failed_submissions: self.failure_count,
        }
    }
}

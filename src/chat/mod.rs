//! Chat client module for interactive conversations with WarmBridge.
//!
//! This module provides a terminal REPL chat interface built on top of the
//! warmbridge provider library. It supports:
//!
//! - Mock and live provider modes
//! - ANSI-styled output for assistant turns and status lines
//! - Slash commands for session control
//!
//! # Architecture
//!
//! The module is organized into several components:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`session`]: Core chat session management and provider interaction
//! - [`commands`]: Slash command parsing and handling

mod commands;
mod config;
mod session;

pub use crate::render::{PlainTextRenderer, Renderer};
pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{ChatArgs, ChatConfig, DEFAULT_ENDPOINT, ProviderMode};
pub use session::{
    ChatSession, SessionStats, SessionStatus, SubmitOutcome, TECHNICAL_PROBLEM_REPLY, WELCOME_TEXT,
};

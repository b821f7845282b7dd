// Public modules
pub mod chat;
pub mod client;
pub mod error;
pub mod mock;
pub mod observability;
pub mod provider;
pub mod render;
pub mod server;
pub mod types;

// Re-exports
pub use client::Completions;
pub use error::{Error, Result};
pub use provider::{BackendProvider, MockProvider, RemoteProvider, ReplyProvider};
pub use render::{PlainTextRenderer, Renderer};
pub use types::*;

// Public modules
pub mod bridge_reply;
pub mod bridge_request;
pub mod completion_request;
pub mod completion_response;
pub mod turn;

// Re-exports
pub use bridge_reply::BridgeReply;
pub use bridge_request::BridgeRequest;
pub use completion_request::CompletionRequest;
pub use completion_response::{
    CompletionChoice, CompletionMessage, CompletionResponse, CompletionUsage,
};
pub use turn::{Role, Turn};

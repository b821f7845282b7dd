use serde::{Deserialize, Serialize};

use crate::types::Turn;

/// Request body for `POST /api/warmbridge`.
///
/// `history` may be omitted on the wire; it deserializes to an empty list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BridgeRequest {
    /// The new user message.
    pub message: String,

    /// Prior turns of the conversation, oldest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<Turn>,
}

impl BridgeRequest {
    /// Create a new `BridgeRequest`.
    pub fn new(message: impl Into<String>, history: Vec<Turn>) -> Self {
        Self {
            message: message.into(),
            history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn history_defaults_to_empty() {
        let request: BridgeRequest =
            serde_json::from_value(json!({ "message": "help me" })).unwrap();
        assert_eq!(request.message, "help me");
        assert!(request.history.is_empty());
    }

    #[test]
    fn empty_history_is_omitted() {
        let request = BridgeRequest::new("help me", Vec::new());
        let json = to_value(&request).unwrap();
        assert_eq!(json, json!({ "message": "help me" }));
    }

    #[test]
    fn history_round_trips() {
        let request = BridgeRequest::new(
            "what next",
            vec![Turn::user("hello"), Turn::assistant("Step 1: ...")],
        );
        let json = to_value(&request).unwrap();
        assert_eq!(
            json,
            json!({
                "message": "what next",
                "history": [
                    { "role": "user", "content": "hello" },
                    { "role": "assistant", "content": "Step 1: ..." }
                ]
            })
        );
    }
}

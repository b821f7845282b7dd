use serde::{Deserialize, Serialize};

/// Response body for `POST /api/warmbridge`.
///
/// The same shape is used for success and failure; a failing call answers
/// with status 500 and a fixed reply text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BridgeReply {
    /// The assistant's reply text.
    pub reply: String,
}

impl BridgeReply {
    /// Create a new `BridgeReply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn reply_serializes_flat() {
        let reply = BridgeReply::new("Step 1: Take a slow, deep breath.");
        assert_eq!(
            to_value(&reply).unwrap(),
            json!({ "reply": "Step 1: Take a slow, deep breath." })
        );
    }
}

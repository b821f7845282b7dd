use serde::{Deserialize, Serialize};

/// Role type for a conversation turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User role.
    User,

    /// Assistant role.
    Assistant,

    /// System instruction role.
    System,
}

/// One message in a conversation: a role and its text content.
///
/// Turns are immutable once created. The session history holds user and
/// assistant turns; system turns only ever appear at the head of a
/// completion request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Turn {
    /// The role of the turn.
    pub role: Role,

    /// The text content of the turn.
    pub content: String,
}

impl Turn {
    /// Create a new `Turn` with the given role and content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a new user `Turn`.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create a new assistant `Turn`.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Create a new system `Turn`.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }
}

impl From<&str> for Turn {
    fn from(content: &str) -> Self {
        Self::user(content)
    }
}

impl From<String> for Turn {
    fn from(content: String) -> Self {
        Self::user(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn turn_serializes_with_lowercase_role() {
        let turn = Turn::user("I need help with a form");
        let json = to_value(&turn).unwrap();

        assert_eq!(
            json,
            json!({
                "role": "user",
                "content": "I need help with a form"
            })
        );
    }

    #[test]
    fn all_roles_round_trip() {
        for (role, tag) in [
            (Role::User, "user"),
            (Role::Assistant, "assistant"),
            (Role::System, "system"),
        ] {
            let turn = Turn::new(role, "x");
            let json = to_value(&turn).unwrap();
            assert_eq!(json["role"], tag);
            let back: Turn = serde_json::from_value(json).unwrap();
            assert_eq!(back, turn);
        }
    }

    #[test]
    fn turn_from_str_is_a_user_turn() {
        let turn: Turn = "Hello".into();
        assert_eq!(turn.role, Role::User);
        assert_eq!(turn.content, "Hello");
    }
}

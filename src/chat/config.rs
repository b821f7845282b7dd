//! Configuration types for the chat client.
//!
//! This module provides CLI argument parsing via `arrrg` and configuration
//! structures for controlling chat behavior.

use arrrg_derive::CommandLine;

/// Default backend endpoint for live mode.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/api/warmbridge";

/// Which provider answers user messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderMode {
    /// Answer locally from the keyword rules; nothing leaves the machine.
    #[default]
    Mock,

    /// Send each message to a WarmBridge backend.
    Live,
}

impl ProviderMode {
    /// The mode line shown when the chat starts.
    pub fn indicator(&self) -> &'static str {
        match self {
            ProviderMode::Mock => "Mode: Mock (no external API used)",
            ProviderMode::Live => "Mode: Live API (via backend)",
        }
    }
}

impl std::fmt::Display for ProviderMode {
    /// Format the provider mode as its string representation.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderMode::Mock => write!(f, "mock"),
            ProviderMode::Live => write!(f, "live"),
        }
    }
}

impl std::str::FromStr for ProviderMode {
    type Err = String;

    /// Parse a provider mode from its string representation.
    ///
    /// Accepts "mock" or "live" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error string if the mode is not recognized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(ProviderMode::Mock),
            "live" => Ok(ProviderMode::Live),
            _ => Err(format!("Invalid mode: {}. Valid options: mock, live", s)),
        }
    }
}

/// Command-line arguments for the warmbridge-chat tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Answer through the backend instead of the local rules.
    #[arrrg(flag, "Use the live backend instead of the local mock")]
    pub live: bool,

    /// Backend endpoint for live mode.
    #[arrrg(
        optional,
        "Backend endpoint (default: http://127.0.0.1:3000/api/warmbridge)",
        "URL"
    )]
    pub endpoint: Option<String>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,
}

/// Configuration for a chat session.
///
/// This struct holds the resolved configuration values after processing
/// command-line arguments with appropriate defaults.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Which provider answers user messages.
    pub mode: ProviderMode,

    /// Backend endpoint used in live mode.
    pub endpoint: String,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    ///
    /// Defaults:
    /// - Mode: mock
    /// - Endpoint: http://127.0.0.1:3000/api/warmbridge
    /// - Color: enabled
    pub fn new() -> Self {
        Self {
            mode: ProviderMode::Mock,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            use_color: true,
        }
    }

    /// Sets the provider mode.
    pub fn with_mode(mut self, mode: ProviderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the backend endpoint.
    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ChatArgs> for ChatConfig {
    fn from(args: ChatArgs) -> Self {
        let mode = if args.live {
            ProviderMode::Live
        } else {
            ProviderMode::Mock
        };
        ChatConfig {
            mode,
            endpoint: args.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            use_color: !args.no_color,
        }
    }
}

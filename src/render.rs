//! Output rendering for the terminal chat client.
//!
//! The session controller never prints directly; it hands every turn,
//! status change, and error to a [`Renderer`]. [`PlainTextRenderer`]
//! writes to stdout with optional ANSI styling. Tests substitute a
//! capturing renderer to observe exactly what a submission rendered.

use std::io::{self, Stdout, Write};

/// ANSI escape code for dim text (used for status lines).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// ANSI escape code for cyan text (used for the assistant label).
const ANSI_CYAN: &str = "\x1b[36m";

/// Trait for rendering conversation output.
///
/// This abstraction allows for different rendering strategies:
/// - Plain text with ANSI styling
/// - Plain text without styling (for piping/redirecting)
/// - Capturing renderers in tests
pub trait Renderer: Send {
    /// Render the user's turn as it enters the conversation.
    fn print_user_turn(&mut self, text: &str);

    /// Render an assistant turn (a real reply or the fallback text).
    fn print_assistant_turn(&mut self, text: &str);

    /// Render a status line ("Thinking...", "Ready.", ...).
    fn print_status(&mut self, status: &str);

    /// Print an error message on the operator channel.
    fn print_error(&mut self, error: &str);

    /// Print an informational message.
    fn print_info(&mut self, info: &str);
}

/// Plain text renderer with optional ANSI styling.
///
/// Assistant turns get a colored label, status lines are dimmed, and
/// errors go to stderr so a piped transcript stays clean.
pub struct PlainTextRenderer {
    stdout: Stdout,
    use_color: bool,
}

impl PlainTextRenderer {
    /// Creates a new PlainTextRenderer with ANSI colors enabled.
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            use_color: true,
        }
    }

    /// Creates a new PlainTextRenderer with specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
        }
    }

    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn print_user_turn(&mut self, _text: &str) {
        // The line the user typed is already on screen at the prompt.
    }

    fn print_assistant_turn(&mut self, text: &str) {
        if self.use_color {
            println!("{ANSI_CYAN}WarmBridge:{ANSI_RESET} {text}");
        } else {
            println!("WarmBridge: {text}");
        }
        self.flush();
    }

    fn print_status(&mut self, status: &str) {
        if self.use_color {
            println!("{ANSI_DIM}{status}{ANSI_RESET}");
        } else {
            println!("{status}");
        }
        self.flush();
    }

    fn print_error(&mut self, error: &str) {
        eprintln!("Error: {error}");
    }

    fn print_info(&mut self, info: &str) {
        println!("{info}");
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_default_has_color() {
        let renderer = PlainTextRenderer::new();
        assert!(renderer.use_color);
    }

    #[test]
    fn renderer_without_color() {
        let renderer = PlainTextRenderer::with_color(false);
        assert!(!renderer.use_color);
    }
}

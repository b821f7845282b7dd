//! Interactive chat application for getting step-by-step help.
//!
//! This binary provides a terminal REPL for talking to WarmBridge. By
//! default it answers locally from the keyword rules; with `--live` it
//! talks to a WarmBridge backend instead.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage, local mock replies
//! warmbridge-chat
//!
//! # Talk to a backend
//! warmbridge-chat --live
//!
//! # Talk to a backend somewhere else
//! warmbridge-chat --live --endpoint http://10.0.0.5:3000/api/warmbridge
//!
//! # Disable colors (useful for piping output)
//! warmbridge-chat --no-color
//! ```
//!
//! # Commands
//!
//! While chatting, you can use slash commands:
//! - `/help` - Show available commands
//! - `/clear` - Clear conversation history
//! - `/stats` - Show session statistics
//! - `/config` - Show current configuration
//! - `/quit` - Exit the application

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use warmbridge::chat::{
    ChatArgs, ChatCommand, ChatConfig, ChatSession, PlainTextRenderer, ProviderMode, Renderer,
    WELCOME_TEXT, help_text, parse_command,
};
use warmbridge::{BackendProvider, MockProvider, ReplyProvider};

/// Main entry point for the warmbridge-chat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("warmbridge-chat [OPTIONS]");
    let config = ChatConfig::from(args);
    let use_color = config.use_color;

    let provider: Box<dyn ReplyProvider> = match config.mode {
        ProviderMode::Mock => Box::new(MockProvider::new()),
        ProviderMode::Live => Box::new(BackendProvider::new(config.endpoint.clone())?),
    };
    let mut session = ChatSession::new(provider, config);
    let mut renderer = PlainTextRenderer::with_color(use_color);
    let mut rl = DefaultEditor::new()?;

    println!("WarmBridge Chat");
    println!("{}", session.config().mode.indicator());
    println!("Type /help for commands, /quit to exit\n");
    renderer.print_assistant_turn(WELCOME_TEXT);

    loop {
        let readline = rl.readline("You: ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                // Check for slash commands
                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                        ChatCommand::Clear => {
                            session.clear();
                            renderer.print_info("Conversation cleared.");
                        }
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ChatCommand::Stats => {
                            print_stats(&session);
                        }
                        ChatCommand::ShowConfig => {
                            print_config(&session);
                        }
                        ChatCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                    continue;
                }

                // Regular message - hand it to the session
                session.submit(line, &mut renderer).await;
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at prompt - soft interrupt
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}

fn print_stats(session: &ChatSession) {
    let stats = session.stats();
    println!("    Session Statistics:");
    println!("      Mode: {}", stats.mode);
    println!("      Messages: {}", stats.message_count);
    println!("      Successful replies: {}", stats.successful_submissions);
    println!("      Failed submissions: {}", stats.failed_submissions);
    println!("      Status: {}", session.status().text());
}

fn print_config(session: &ChatSession) {
    let config = session.config();
    println!("    Current Configuration:");
    println!("      Mode: {}", config.mode);
    println!("      Endpoint: {}", config.endpoint);
    println!(
        "      Color: {}",
        if config.use_color {
            "enabled"
        } else {
            "disabled"
        }
    );
}

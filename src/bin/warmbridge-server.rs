//! HTTP backend for WarmBridge clients.
//!
//! This binary serves `POST /api/warmbridge`, answering each message
//! through the external completion service (or locally with `--mock`).
//! The API key stays on this server; browser and terminal clients only
//! ever see reply text.
//!
//! # Usage
//!
//! ```bash
//! # Serve live replies on 0.0.0.0:3000 (needs WARMBRIDGE_API_KEY)
//! warmbridge-server
//!
//! # Serve canned replies, no key and no network egress
//! warmbridge-server --mock
//!
//! # Bind somewhere else
//! warmbridge-server --bind 127.0.0.1:8080
//! ```

use std::sync::Arc;

use arrrg::CommandLine;
use arrrg_derive::CommandLine;
use tracing_subscriber::EnvFilter;

use warmbridge::server::{AppState, DEFAULT_BIND_ADDR, serve};
use warmbridge::{Completions, MockProvider, RemoteProvider, ReplyProvider};

/// Command-line arguments for the warmbridge-server tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
struct Args {
    /// Address to bind.
    #[arrrg(optional, "Address to bind (default: 0.0.0.0:3000)", "ADDR")]
    bind: Option<String>,

    /// Model used for live replies.
    #[arrrg(optional, "Model for live replies (default: gpt-4o-mini)", "MODEL")]
    model: Option<String>,

    /// Answer from the keyword rules instead of the external API.
    #[arrrg(flag, "Serve mock replies without calling the external API")]
    mock: bool,
}

/// Main entry point for the warmbridge-server application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = Args::from_command_line_relaxed("warmbridge-server [OPTIONS]");

    // Fallback to the `default_level` log filter if the environment
    // variable is not set _or_ contains an invalid value
    let default_level = "info";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let provider: Arc<dyn ReplyProvider> = if args.mock {
        tracing::info!("serving mock replies");
        Arc::new(MockProvider::new())
    } else {
        let client = Completions::new(None)?;
        match args.model {
            Some(model) => Arc::new(RemoteProvider::with_model(client, model)),
            None => Arc::new(RemoteProvider::new(client)),
        }
    };

    let addr = args.bind.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
    serve(&addr, AppState::new(provider)).await?;
    Ok(())
}

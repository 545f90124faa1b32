use anyhow::Result;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use sidekick_agent::{ui, Config, Dispatcher, GeminiClient};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr so they never mix with the chat on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("⚠️ {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };
    tracing::debug!(?config, "Loaded configuration");

    let dispatcher = Dispatcher::new(GeminiClient::new(&config));
    ui::interactive_chat(&dispatcher).await?;

    Ok(ExitCode::SUCCESS)
}

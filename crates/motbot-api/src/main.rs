//! motbot entry point.
//!
//! Binary name: `motbot`
//!
//! Parses CLI arguments, loads configuration, wires the HTTP clients into
//! the conversation engine, and runs the Telegram long-polling loop until
//! Ctrl+C/SIGTERM.

mod poller;

use std::path::PathBuf;

use clap::Parser;
use secrecy::ExposeSecret;
use tracing_subscriber::EnvFilter;

use motbot_core::conversation::ConversationEngine;
use motbot_core::summary::{Summarizer, SummarizerConfig};
use motbot_infra::auth::TokenClient;
use motbot_infra::config;
use motbot_infra::llm::OpenAiChatModel;
use motbot_infra::mot::MotHistoryClient;
use motbot_infra::telegram::TelegramClient;

/// MoT history chat relay over Telegram.
#[derive(Parser)]
#[command(name = "motbot", version, about)]
struct Cli {
    /// Path to the tunables file.
    #[arg(long, default_value = "motbot.toml")]
    config: PathBuf,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,motbot=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let tunables = config::load_tunables(&cli.config).await;
    let settings = config::settings_from_env(tunables)?;
    let tunables = settings.tunables.clone();

    let tokens = TokenClient::new(
        settings.token_url,
        settings.client_id,
        settings.client_secret,
        settings.scope_url,
    );
    let records = MotHistoryClient::new(tokens, settings.mot_api_key)
        .with_base_url(tunables.mot_base_url.clone());

    let model = match tunables.openai_base_url.as_deref() {
        Some(base_url) => OpenAiChatModel::with_base_url(
            settings.openai_api_key.expose_secret(),
            &tunables.model,
            base_url,
        ),
        None => OpenAiChatModel::new(settings.openai_api_key.expose_secret(), &tunables.model),
    };

    let summarizer = Summarizer::new(
        model,
        SummarizerConfig {
            model: tunables.model.clone(),
            temperature: tunables.temperature,
            summary_max_tokens: tunables.summary_max_tokens,
            follow_up_max_tokens: tunables.follow_up_max_tokens,
        },
    );

    let engine = ConversationEngine::new(records, summarizer);
    let telegram = TelegramClient::new(settings.telegram_bot_token, tunables.poll_timeout_secs);

    println!(
        "  {} motbot polling for updates ({})",
        console::style("🚀").bold(),
        console::style(&tunables.model).cyan()
    );
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    tokio::select! {
        _ = poller::run(&telegram, &engine) => {}
        _ = shutdown_signal() => {}
    }

    println!("\n  Bot stopped.");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

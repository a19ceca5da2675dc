//! Desk Timer - a keyboard-driven countdown timer
//!
//! This is the main entry point for the desk-timer application.

use std::sync::Arc;
use tracing::info;

use desk_timer::{
    config::Config,
    effects::ChannelDispatcher,
    state::AppState,
    tasks::{countdown_ticker_task, display_task, effect_runner_task, key_input_task, WatchTicker},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so stdout carries only the display
    tracing_subscriber::fmt()
        .with_env_filter(format!("desk_timer={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting desk-timer v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: default={}s, effect={}, json={}",
          config.default_seconds, config.effect, config.json);

    let (ticker, armed_rx) = WatchTicker::channel();
    let (dispatcher, effect_rx) = ChannelDispatcher::channel();
    let state = Arc::new(AppState::new(config.default_seconds, config.effect, ticker, dispatcher));

    tokio::spawn(countdown_ticker_task(Arc::clone(&state), armed_rx));
    tokio::spawn(effect_runner_task(Arc::clone(&state), effect_rx));
    tokio::spawn(display_task(state.subscribe(), config.json));

    tokio::select! {
        _ = key_input_task(Arc::clone(&state)) => {}
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    state.shutdown();
    info!("Session ended after {}", state.get_uptime());

    // The stdin reader sits on a blocking thread the runtime would wait on
    std::process::exit(0)
}

//! Waitline - waitlist signup widget.
//!
//! This binary renders the waitlist landing page in the terminal: a live
//! signup counter fetched from the stats endpoint and a modal signup form
//! that posts to the signup endpoint.
//!
//! # Environment Variables
//!
//! See the [`config`] module for available configuration options.
//!
//! [`config`]: waitline_widget::config

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use waitline_widget::api::ApiClient;
use waitline_widget::config::Config;
use waitline_widget::tui::app::{AppState, Theme, MODAL_DISMISS_DELAY};
use waitline_widget::tui::{install_panic_hook, ui, EventHandler, Tui, UiEvent};

/// Capacity of the UI event channel.
const EVENT_CHANNEL_SIZE: usize = 100;

/// Waitline - waitlist signup widget.
///
/// Shows the current signup count and lets you join the waitlist from the
/// terminal. All configuration comes from environment variables; there are
/// no operational flags.
#[derive(Parser, Debug)]
#[command(name = "waitline")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
ENVIRONMENT VARIABLES:
    WAITLINE_API_BASE      Full API base URL (overrides mode resolution)
    WAITLINE_MODE          development | production (default: build profile)
    WAITLINE_SERVER_URL    Origin joined with /api in production mode
    WAITLINE_LOG           File path for tracing output (default: stderr)
    RUST_LOG               Tracing filter (default: info)

EXAMPLES:
    # Local development against a backend on http://0.0.0.0:8000
    waitline

    # Against a deployed instance
    export WAITLINE_MODE=production
    export WAITLINE_SERVER_URL=https://waitline.example.com
    waitline
")]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    runtime.block_on(run_widget())
}

/// Runs the widget until the user quits.
async fn run_widget() -> Result<()> {
    init_logging()?;

    info!("Starting Waitline widget");

    let config = Config::from_env().context("Failed to load configuration")?;

    info!(
        api_base = %config.api_base,
        mode = %config.mode,
        "Configuration loaded"
    );

    let client = ApiClient::new(config.api_base.clone());

    let (event_tx, mut event_rx) = mpsc::channel::<UiEvent>(EVENT_CHANNEL_SIZE);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    // Terminal input and ticks.
    let handler = EventHandler::new(event_tx.clone(), shutdown_rx);
    let handler_task = tokio::spawn(handler.run());

    // Fire-and-forget startup stats fetch. There is no ordering guarantee
    // against a fast user submission; both writers go through the same
    // last-write-wins snapshot.
    {
        let client = client.clone();
        let event_tx = event_tx.clone();
        tokio::spawn(async move {
            let snapshot = client.fetch_stats().await;
            let _ = event_tx.send(UiEvent::StatsLoaded(snapshot)).await;
        });
    }

    install_panic_hook();
    let mut tui = Tui::new().context("Failed to initialize terminal")?;

    let mut state = AppState {
        theme: Theme::from_env(),
        ..AppState::new()
    };

    while let Some(event) = event_rx.recv().await {
        match event {
            UiEvent::Tick | UiEvent::Resize(_, _) => {}

            UiEvent::Key(key) => {
                if let Some(request) = state.handle_key(key) {
                    let client = client.clone();
                    let event_tx = event_tx.clone();
                    tokio::spawn(async move {
                        let outcome = client.submit(&request).await;
                        let _ = event_tx.send(UiEvent::SubmissionFinished(outcome)).await;
                    });
                }
            }

            UiEvent::StatsLoaded(snapshot) => {
                debug!(total_signups = snapshot.total_signups, "Stats loaded");
                state.apply_stats(snapshot);
            }

            UiEvent::SubmissionFinished(outcome) => {
                if state.apply_submission(outcome) {
                    // Auto-close the modal a moment after a successful signup.
                    let event_tx = event_tx.clone();
                    tokio::spawn(async move {
                        tokio::time::sleep(MODAL_DISMISS_DELAY).await;
                        let _ = event_tx.send(UiEvent::CloseForm).await;
                    });
                }
            }

            UiEvent::CloseForm => state.close_form(),
        }

        if state.should_quit() {
            break;
        }

        tui.draw(|frame| ui::render(frame, &state))
            .context("Failed to render frame")?;
    }

    // Graceful teardown: stop the event handler, then restore the terminal.
    let _ = shutdown_tx.send(());
    let _ = handler_task.await;
    tui.restore().context("Failed to restore terminal")?;

    info!("Widget stopped");
    Ok(())
}

/// Initializes the logging subsystem.
///
/// The TUI owns the terminal, so output defaults to stderr and moves to a
/// file when `WAITLINE_LOG` names one.
fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match std::env::var("WAITLINE_LOG") {
        Ok(path) => {
            let file = std::fs::File::create(&path)
                .with_context(|| format!("Failed to open log file {path}"))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        Err(_) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

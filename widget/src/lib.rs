//! Waitline Widget - waitlist signup form and live counter.
//!
//! This crate implements the client side of the Waitline waitlist: a
//! terminal-hosted landing page with a live signup counter and a modal
//! email/website signup form, talking to an external JSON REST API
//! (`GET {api_base}/stats`, `POST {api_base}/signup`).
//!
//! # Overview
//!
//! On startup the widget fires a one-shot stats fetch and renders the
//! counter (0 until the fetch lands, or on any fetch failure). Submitting
//! the form validates the email locally, sends exactly one POST, and
//! reconciles the response into display state: accepted signups show the
//! server's message and the new count, business failures show the server's
//! message verbatim, and every transport problem collapses into one generic
//! connection message. There is no retry, no persistence, and no state that
//! outlives the process.
//!
//! # Modules
//!
//! - [`types`]: wire types for the signup API and the stats snapshot
//! - [`api`]: HTTP client for the two endpoints
//! - [`config`]: API base resolution from environment variables
//! - [`error`]: error types for widget operations
//! - [`tui`]: terminal user interface (state machine, widgets, terminal)

pub mod api;
pub mod config;
pub mod error;
pub mod tui;
pub mod types;

pub use api::{ApiClient, ApiError};
pub use config::{Config, ConfigError, Mode};
pub use error::{Result, TuiError, ValidationError, WidgetError};
pub use tui::{AppState, EventHandler, Tui, UiEvent};
pub use types::{SignupRequest, SignupResponse, StatsResponse, StatsSnapshot};

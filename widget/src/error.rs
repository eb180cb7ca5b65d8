//! Error types for the Waitline widget.
//!
//! This module defines the error types used throughout the widget crate.
//! The taxonomy mirrors how failures are surfaced to the user:
//!
//! - [`ValidationError`]: local form validation, recovered inline and never
//!   propagated past the form
//! - [`crate::api::ApiError`]: the transport bucket (network failure,
//!   non-2xx status, undecodable body), surfaced as one generic message
//! - [`ConfigError`] and [`TuiError`]: startup and terminal plumbing
//!
//! Business-rule failures reported inside a successful HTTP response
//! (`success: false`) are data, not errors, and never appear here.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

/// Errors that can occur during widget operations.
///
/// This is the primary error type for the widget crate. Everything that can
/// abort startup or the event loop converges here; per-submission outcomes
/// are handled in place and never bubble this far.
#[derive(Error, Debug)]
pub enum WidgetError {
    /// Configuration-related error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Signup API transport error.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Terminal I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TUI-related error.
    #[error("TUI error: {0}")]
    Tui(#[from] TuiError),
}

/// Errors that can occur during TUI operation.
#[derive(Error, Debug)]
pub enum TuiError {
    /// Terminal initialization failed.
    #[error("failed to initialize terminal: {0}")]
    TerminalInit(#[source] std::io::Error),

    /// Terminal rendering failed.
    #[error("render error: {0}")]
    Render(#[source] std::io::Error),

    /// Event handling error.
    #[error("event error: {0}")]
    Event(String),
}

/// Local validation failures for the signup form.
///
/// The `Display` output of each variant is the exact message shown inline in
/// the form, so callers surface these with `to_string()` and nothing else.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Email field is empty after trimming.
    #[error("Email is required")]
    EmptyEmail,

    /// Email is missing an `@` or a `.` character.
    #[error("Please enter a valid email address")]
    MalformedEmail,
}

/// A specialized `Result` type for widget operations.
pub type Result<T> = std::result::Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_email_display() {
        let err = ValidationError::EmptyEmail;
        assert_eq!(err.to_string(), "Email is required");
    }

    #[test]
    fn validation_error_malformed_email_display() {
        let err = ValidationError::MalformedEmail;
        assert_eq!(err.to_string(), "Please enter a valid email address");
    }

    #[test]
    fn widget_error_config_display() {
        let config_err = ConfigError::MissingEnvVar("WAITLINE_SERVER_URL".to_string());
        let err = WidgetError::Config(config_err);
        assert_eq!(
            err.to_string(),
            "configuration error: missing required environment variable: WAITLINE_SERVER_URL"
        );
    }

    #[test]
    fn widget_error_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WidgetError = io_err.into();
        assert!(matches!(err, WidgetError::Io(_)));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn widget_error_json_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ nope }").unwrap_err();
        let err: WidgetError = json_err.into();
        assert!(matches!(err, WidgetError::Json(_)));
    }

    #[test]
    fn tui_error_terminal_init_display() {
        let io_err = std::io::Error::other("raw mode failed");
        let err = TuiError::TerminalInit(io_err);
        assert_eq!(
            err.to_string(),
            "failed to initialize terminal: raw mode failed"
        );
    }

    #[test]
    fn tui_error_to_widget_error_conversion() {
        let tui_err = TuiError::Event("poll timeout".to_string());
        let err: WidgetError = tui_err.into();
        assert!(matches!(err, WidgetError::Tui(_)));
        assert_eq!(err.to_string(), "TUI error: event error: poll timeout");
    }

    #[test]
    fn error_source_chain() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: WidgetError = io_err.into();
        assert!(err.source().is_some());
    }
}

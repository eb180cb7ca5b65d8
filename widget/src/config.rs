//! Configuration module for the Waitline widget.
//!
//! This module handles resolving the signup API base URL from environment
//! variables, mirroring the build-mode switch of the hosted widget: a fixed
//! local address during development and an `/api` prefix joined onto the
//! deployed origin in production.
//!
//! # Environment Variables
//!
//! | Variable | Required | Default | Description |
//! |----------|----------|---------|-------------|
//! | `WAITLINE_API_BASE` | No | resolved from mode | Full base URL for both endpoints (overrides everything) |
//! | `WAITLINE_MODE` | No | build profile | `development` or `production` |
//! | `WAITLINE_SERVER_URL` | In production | - | Origin the production `/api` prefix is joined to |
//! | `WAITLINE_LOG` | No | stderr | File path for tracing output |
//!
//! # Example
//!
//! ```no_run
//! use waitline_widget::config::Config;
//!
//! let config = Config::from_env().expect("Failed to load configuration");
//! println!("API base: {}", config.api_base);
//! ```

use std::env;
use std::fmt;

use thiserror::Error;

/// Fixed API base used in development mode, matching the local backend.
const DEFAULT_DEV_API_BASE: &str = "http://0.0.0.0:8000";

/// Path prefix joined onto the server origin in production mode.
const PRODUCTION_API_PREFIX: &str = "/api";

/// Errors that can occur during configuration parsing.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable has an invalid value.
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Build mode the API base is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Local development against a backend on a fixed local address.
    Development,
    /// Deployed build talking to `{origin}/api`.
    Production,
}

impl Mode {
    /// Returns the mode implied by the build profile: development for debug
    /// builds, production for release builds.
    #[must_use]
    pub fn from_build_profile() -> Self {
        if cfg!(debug_assertions) {
            Mode::Development
        } else {
            Mode::Production
        }
    }

    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.to_lowercase().as_str() {
            "development" | "dev" => Ok(Mode::Development),
            "production" | "prod" => Ok(Mode::Production),
            other => Err(ConfigError::InvalidValue {
                key: "WAITLINE_MODE".to_string(),
                message: format!("expected 'development' or 'production', got '{other}'"),
            }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Development => write!(f, "development"),
            Mode::Production => write!(f, "production"),
        }
    }
}

/// Configuration for the Waitline widget.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the signup API; endpoints are `{api_base}/stats` and
    /// `{api_base}/signup`.
    pub api_base: String,

    /// Mode the base URL was resolved for.
    pub mode: Mode,
}

impl Config {
    /// Creates a new `Config` by parsing environment variables.
    ///
    /// Resolution order for the API base:
    ///
    /// 1. `WAITLINE_API_BASE`, verbatim (trailing slash trimmed)
    /// 2. Development mode: the fixed local address `http://0.0.0.0:8000`
    /// 3. Production mode: `WAITLINE_SERVER_URL` + `/api`
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if:
    /// - `WAITLINE_MODE` is set to something other than
    ///   `development`/`production`
    /// - Production mode is active without `WAITLINE_API_BASE` or
    ///   `WAITLINE_SERVER_URL`
    pub fn from_env() -> Result<Self, ConfigError> {
        let mode = match env::var("WAITLINE_MODE") {
            Ok(value) => Mode::parse(&value)?,
            Err(_) => Mode::from_build_profile(),
        };

        // Explicit override wins regardless of mode.
        if let Ok(base) = env::var("WAITLINE_API_BASE") {
            let trimmed = base.trim().trim_end_matches('/');
            if trimmed.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: "WAITLINE_API_BASE".to_string(),
                    message: "expected a non-empty URL".to_string(),
                });
            }
            return Ok(Self {
                api_base: trimmed.to_string(),
                mode,
            });
        }

        let api_base = match mode {
            Mode::Development => DEFAULT_DEV_API_BASE.to_string(),
            Mode::Production => {
                let origin = env::var("WAITLINE_SERVER_URL")
                    .map_err(|_| ConfigError::MissingEnvVar("WAITLINE_SERVER_URL".to_string()))?;
                let origin = origin.trim().trim_end_matches('/');
                if origin.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        key: "WAITLINE_SERVER_URL".to_string(),
                        message: "expected a non-empty origin".to_string(),
                    });
                }
                format!("{origin}{PRODUCTION_API_PREFIX}")
            }
        };

        Ok(Self { api_base, mode })
    }
}

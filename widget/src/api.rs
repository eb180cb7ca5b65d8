//! HTTP client for the Waitline signup API.
//!
//! This module wraps the two external endpoints behind [`ApiClient`]:
//!
//! - `GET {api_base}/stats` via [`ApiClient::fetch_stats`]
//! - `POST {api_base}/signup` via [`ApiClient::submit`]
//!
//! The client issues exactly one request per call: no retry, no backoff, no
//! request deduplication. A non-2xx status is treated as a transport failure
//! alongside connection errors and undecodable bodies; business-rule
//! failures (`success: false` inside a 2xx response) are returned as data.
//!
//! # Example
//!
//! ```no_run
//! use waitline_widget::api::ApiClient;
//! use waitline_widget::types::SignupRequest;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = ApiClient::new("http://0.0.0.0:8000");
//!
//!     let snapshot = client.fetch_stats().await;
//!     println!("{} signups so far", snapshot.total_signups);
//!
//!     let request = SignupRequest::from_form("a@b.com", "");
//!     match client.submit(&request).await {
//!         Ok(response) => println!("{}", response.message),
//!         Err(e) => eprintln!("submission failed: {e}"),
//!     }
//! }
//! ```

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::types::{SignupRequest, SignupResponse, StatsResponse, StatsSnapshot};

/// HTTP request timeout.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur while talking to the signup API.
///
/// Every variant lands in the same transport bucket from the user's point of
/// view; the distinction exists for diagnostics.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection-level failure (refused, DNS, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("server returned status {status}")]
    Status { status: u16 },

    /// Response body could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Client for the Waitline signup API.
///
/// Holds a pooled [`reqwest::Client`]; clone-cheap handles are obtained by
/// cloning the whole struct, which shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    api_base: String,
}

impl ApiClient {
    /// Creates a new client for the given API base URL.
    ///
    /// # Arguments
    ///
    /// * `api_base` - Base URL; endpoints are `{api_base}/stats` and
    ///   `{api_base}/signup`
    #[must_use]
    pub fn new(api_base: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_base: api_base.into(),
        }
    }

    /// Returns the full URL for an endpoint path.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path)
    }

    /// Fetches the current signup count.
    ///
    /// Failures never reach the caller: any transport or decode problem is
    /// logged and an unfetched zero snapshot is returned, so callers can
    /// render unconditionally. No retry.
    pub async fn fetch_stats(&self) -> StatsSnapshot {
        match self.try_fetch_stats().await {
            Ok(snapshot) => {
                info!(
                    total_signups = snapshot.total_signups,
                    "Signup stats fetched"
                );
                snapshot
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch signup stats, displaying 0");
                StatsSnapshot::default()
            }
        }
    }

    async fn try_fetch_stats(&self) -> Result<StatsSnapshot, ApiError> {
        let url = self.endpoint("stats");
        debug!(url = %url, "Fetching signup stats");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let stats: StatsResponse = serde_json::from_str(&body)?;
        Ok(StatsSnapshot::now(stats.total_signups))
    }

    /// Submits a signup request.
    ///
    /// Sends the JSON body in a single POST and decodes the response. A 2xx
    /// answer is returned verbatim, including `success: false` business
    /// failures; everything else is an [`ApiError`] for the caller's
    /// transport bucket.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on connection failure, non-2xx status, or an
    /// undecodable body.
    pub async fn submit(&self, request: &SignupRequest) -> Result<SignupResponse, ApiError> {
        let url = self.endpoint("signup");
        debug!(url = %url, email = %request.email, "Submitting signup");

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let outcome: SignupResponse = serde_json::from_str(&body)?;
        info!(
            success = outcome.success,
            total_signups = ?outcome.total_signups,
            "Signup response received"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_path() {
        let client = ApiClient::new("http://0.0.0.0:8000");
        assert_eq!(client.endpoint("stats"), "http://0.0.0.0:8000/stats");
        assert_eq!(client.endpoint("signup"), "http://0.0.0.0:8000/signup");
    }

    #[test]
    fn endpoint_respects_prefixed_base() {
        let client = ApiClient::new("https://waitline.example.com/api");
        assert_eq!(
            client.endpoint("stats"),
            "https://waitline.example.com/api/stats"
        );
    }

    #[test]
    fn status_error_display() {
        let err = ApiError::Status { status: 500 };
        assert_eq!(err.to_string(), "server returned status 500");
    }

    #[test]
    fn json_error_display() {
        let json_err = serde_json::from_str::<SignupResponse>("{ nope }").unwrap_err();
        let err: ApiError = json_err.into();
        assert!(err.to_string().starts_with("JSON error:"));
    }
}

//! Wire types for the Waitline signup API.
//!
//! This module defines the JSON schema spoken by the two external endpoints:
//! `GET {api_base}/stats` and `POST {api_base}/signup`. All types serialize
//! to snake_case JSON, matching the backend exactly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response body of `GET {api_base}/stats`.
///
/// The backend always includes `total_signups`, but the field defaults to 0
/// when absent so a sparse or older response still decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Current aggregate signup count.
    #[serde(default)]
    pub total_signups: u64,
}

/// Request body of `POST {api_base}/signup`.
///
/// Both fields are sent trimmed; `website` is optional from the user's point
/// of view and is transmitted as an empty string when blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    /// Email address to add to the waitlist.
    pub email: String,

    /// Website URL, or an empty string when the user left it blank.
    pub website: String,
}

impl SignupRequest {
    /// Creates a request from raw form input, trimming both fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitline_widget::types::SignupRequest;
    ///
    /// let req = SignupRequest::from_form("  a@b.com ", " https://a.example ");
    /// assert_eq!(req.email, "a@b.com");
    /// assert_eq!(req.website, "https://a.example");
    /// ```
    #[must_use]
    pub fn from_form(email: &str, website: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            website: website.trim().to_string(),
        }
    }
}

/// Response body of `POST {api_base}/signup`.
///
/// `success: false` is a business-rule failure (for example a duplicate
/// signup), not a transport failure; the server's `message` is shown to the
/// user verbatim in both cases. `total_signups` may be omitted, typically on
/// responses that carry no count update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupResponse {
    /// Whether the signup was accepted.
    pub success: bool,

    /// Human-readable outcome message, shown to the user as-is.
    pub message: String,

    /// Updated aggregate signup count, when the server included one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_signups: Option<u64>,
}

/// Last-known aggregate signup count displayed by the widget.
///
/// The snapshot is last-write-wins: whichever response arrived most recently
/// (startup stats fetch or a signup response) owns the value. There is no
/// cache invalidation or staleness policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    /// Aggregate signup count to display.
    pub total_signups: u64,

    /// When the count was last refreshed, if it ever was.
    pub fetched_at: Option<DateTime<Utc>>,
}

impl StatsSnapshot {
    /// Creates a snapshot stamped with the current time.
    #[must_use]
    pub fn now(total_signups: u64) -> Self {
        Self {
            total_signups,
            fetched_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_response_deserializes() {
        let resp: StatsResponse = serde_json::from_str(r#"{"total_signups": 42}"#).unwrap();
        assert_eq!(resp.total_signups, 42);
    }

    #[test]
    fn stats_response_defaults_missing_count_to_zero() {
        let resp: StatsResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.total_signups, 0);
    }

    #[test]
    fn signup_request_from_form_trims_fields() {
        let req = SignupRequest::from_form("  a@b.com  ", "  https://a.example  ");
        assert_eq!(req.email, "a@b.com");
        assert_eq!(req.website, "https://a.example");
    }

    #[test]
    fn signup_request_serializes_snake_case() {
        let req = SignupRequest::from_form("a@b.com", "");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "a@b.com", "website": ""})
        );
    }

    #[test]
    fn signup_response_with_count() {
        let resp: SignupResponse = serde_json::from_str(
            r#"{"success": true, "message": "Welcome", "total_signups": 43}"#,
        )
        .unwrap();
        assert!(resp.success);
        assert_eq!(resp.message, "Welcome");
        assert_eq!(resp.total_signups, Some(43));
    }

    #[test]
    fn signup_response_without_count() {
        let resp: SignupResponse =
            serde_json::from_str(r#"{"success": false, "message": "Already joined"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.total_signups, None);
    }

    #[test]
    fn signup_response_zero_count_is_present() {
        // A count of 0 is still a count; it must not collapse into None.
        let resp: SignupResponse = serde_json::from_str(
            r#"{"success": false, "message": "Not open yet", "total_signups": 0}"#,
        )
        .unwrap();
        assert_eq!(resp.total_signups, Some(0));
    }

    #[test]
    fn stats_snapshot_default_is_zero_and_unfetched() {
        let snap = StatsSnapshot::default();
        assert_eq!(snap.total_signups, 0);
        assert!(snap.fetched_at.is_none());
    }

    #[test]
    fn stats_snapshot_now_is_stamped() {
        let snap = StatsSnapshot::now(7);
        assert_eq!(snap.total_signups, 7);
        assert!(snap.fetched_at.is_some());
    }
}

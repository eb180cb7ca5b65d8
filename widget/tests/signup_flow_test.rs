//! Integration tests for the signup and stats flows.
//!
//! These tests drive the real [`ApiClient`] against a wiremock server and
//! feed the outcomes through the widget state machine, covering the
//! observable contract end to end: counter display, message display, field
//! clearing, and the no-network guarantee of local validation.

use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use waitline_widget::api::ApiClient;
use waitline_widget::tui::app::{AppState, CONNECT_FAILURE_MESSAGE};
use waitline_widget::types::StatsSnapshot;

// =============================================================================
// Test Helpers
// =============================================================================

/// Creates an app state with the given form input.
fn state_with_form(email: &str, website: &str) -> AppState {
    let mut state = AppState::new();
    state.open_form();
    state.form.email = email.to_string();
    state.form.website = website.to_string();
    state
}

/// Mounts a stats endpoint returning the given count.
async fn mount_stats(server: &MockServer, total_signups: u64) {
    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "total_signups": total_signups })),
        )
        .mount(server)
        .await;
}

// =============================================================================
// Stats Fetch
// =============================================================================

#[tokio::test]
async fn initial_stats_fetch_shows_server_count() {
    let mock_server = MockServer::start().await;
    mount_stats(&mock_server, 42).await;

    let client = ApiClient::new(mock_server.uri());
    let snapshot = client.fetch_stats().await;

    let mut state = AppState::new();
    state.apply_stats(snapshot);

    assert_eq!(state.stats.total_signups, 42);
    assert!(state.stats.fetched_at.is_some());
}

#[tokio::test]
async fn stats_fetch_error_status_shows_zero() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let snapshot = client.fetch_stats().await;

    assert_eq!(snapshot.total_signups, 0);
    assert!(snapshot.fetched_at.is_none());
}

#[tokio::test]
async fn stats_fetch_connection_failure_shows_zero() {
    // Nothing is listening here; the connection is refused.
    let client = ApiClient::new("http://127.0.0.1:1");
    let snapshot = client.fetch_stats().await;

    assert_eq!(snapshot.total_signups, 0);
}

#[tokio::test]
async fn stats_fetch_malformed_body_shows_zero() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let snapshot = client.fetch_stats().await;

    assert_eq!(snapshot.total_signups, 0);
}

#[tokio::test]
async fn stats_fetch_missing_count_defaults_to_zero() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let snapshot = client.fetch_stats().await;

    assert_eq!(snapshot.total_signups, 0);
    assert!(snapshot.fetched_at.is_some());
}

// =============================================================================
// Signup Submission
// =============================================================================

#[tokio::test]
async fn accepted_signup_shows_message_count_and_clears_fields() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/signup"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "email": "a@b.com",
            "website": ""
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "Welcome",
            "total_signups": 43
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let mut state = state_with_form("a@b.com", "");

    let request = state.begin_submission().expect("validation should pass");
    assert!(state.submission.is_loading);

    let outcome = client.submit(&request).await;
    let dismiss = state.apply_submission(outcome);

    assert!(dismiss);
    assert!(state.submission.is_success);
    assert_eq!(state.submission.message, "Welcome");
    assert_eq!(state.stats.total_signups, 43);
    assert!(state.form.email.is_empty());
    assert!(state.form.website.is_empty());
}

#[tokio::test]
async fn submitted_body_is_trimmed() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/signup"))
        .and(body_json(serde_json::json!({
            "email": "a@b.com",
            "website": "https://a.example"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "Welcome",
            "total_signups": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let mut state = state_with_form("  a@b.com  ", "  https://a.example  ");

    let request = state.begin_submission().expect("validation should pass");
    let outcome = client.submit(&request).await;

    assert!(state.apply_submission(outcome));
}

#[tokio::test]
async fn server_error_shows_generic_message_and_keeps_count() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/signup"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let mut state = state_with_form("a@b.com", "");
    state.apply_stats(StatsSnapshot::now(42));

    let request = state.begin_submission().expect("validation should pass");
    let outcome = client.submit(&request).await;
    let dismiss = state.apply_submission(outcome);

    assert!(!dismiss);
    assert!(!state.submission.is_success);
    assert_eq!(state.submission.message, CONNECT_FAILURE_MESSAGE);
    assert_eq!(state.stats.total_signups, 42);
    assert_eq!(state.form.email, "a@b.com");
}

#[tokio::test]
async fn connection_failure_shows_generic_message() {
    let client = ApiClient::new("http://127.0.0.1:1");
    let mut state = state_with_form("a@b.com", "");
    state.apply_stats(StatsSnapshot::now(42));

    let request = state.begin_submission().expect("validation should pass");
    let outcome = client.submit(&request).await;
    state.apply_submission(outcome);

    assert_eq!(state.submission.message, CONNECT_FAILURE_MESSAGE);
    assert_eq!(state.stats.total_signups, 42);
}

#[tokio::test]
async fn business_failure_shows_server_message_and_updates_count() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "message": "Already joined",
            "total_signups": 43
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let mut state = state_with_form("a@b.com", "");

    let request = state.begin_submission().expect("validation should pass");
    let outcome = client.submit(&request).await;
    let dismiss = state.apply_submission(outcome);

    assert!(!dismiss);
    assert!(!state.submission.is_success);
    assert_eq!(state.submission.message, "Already joined");
    assert_eq!(state.stats.total_signups, 43);
    // Fields stay for the user to correct or retry.
    assert_eq!(state.form.email, "a@b.com");
}

#[tokio::test]
async fn malformed_success_body_lands_in_transport_bucket() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let mut state = state_with_form("a@b.com", "");

    let request = state.begin_submission().expect("validation should pass");
    let outcome = client.submit(&request).await;
    state.apply_submission(outcome);

    assert_eq!(state.submission.message, CONNECT_FAILURE_MESSAGE);
}

// =============================================================================
// Validation Short-Circuit
// =============================================================================

#[tokio::test]
async fn validation_failures_never_reach_the_network() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/signup"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    for (email, expected_message) in [
        ("", "Email is required"),
        ("   ", "Email is required"),
        ("missing-at.com", "Please enter a valid email address"),
        ("missing@dotcom", "Please enter a valid email address"),
    ] {
        let mut state = state_with_form(email, "");

        let request = state.begin_submission();

        assert!(request.is_none(), "email {email:?} should be rejected");
        assert!(!state.submission.is_loading);
        assert_eq!(state.submission.message, expected_message);
    }

    // Dropping the server verifies the expect(0) assertion.
    mock_server.verify().await;
}

//! Application state and event management for the Waitline TUI.
//!
//! This module contains the widget's state machine and the event plumbing
//! that drives it:
//!
//! - [`AppState`]: landing page + modal form state, owned by the main task
//! - [`UiEvent`]: events that drive the TUI event loop
//! - [`EventHandler`]: async loop multiplexing terminal input, ticks, and a
//!   shutdown signal over an MPSC channel
//!
//! # Architecture
//!
//! All state changes are triggered by [`UiEvent`] variants processed on the
//! main task; the two network suspension points (startup stats fetch and
//! form submission) run as spawned tasks that report back through the same
//! channel, so the state itself needs no locking.
//!
//! Each submission moves through `idle → loading → (success | failure)` and
//! the machine is re-entrant on the next attempt. The only double-submit
//! guard is the inert submit control while a submission is in flight.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::style::{Color, Modifier, Style};
use tokio::sync::{mpsc, oneshot};
use tracing::warn;

use crate::api::ApiError;
use crate::tui::widgets::validate_email;
use crate::types::{SignupRequest, SignupResponse, StatsSnapshot};

/// Generic message shown for any transport failure (connection error,
/// non-2xx status, undecodable body).
pub const CONNECT_FAILURE_MESSAGE: &str = "Unable to connect to server. Please try again later.";

/// How long a successful signup stays on screen before the modal closes on
/// its own. Presentation nicety, not a correctness contract.
pub const MODAL_DISMISS_DELAY: Duration = Duration::from_secs(2);

// =============================================================================
// Form and Submission State
// =============================================================================

/// Form field that can receive focus in the signup modal.
///
/// Tab order is email, website, submit; navigation wraps in both
/// directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Email address text input. First in tab order and the default focus.
    #[default]
    Email,

    /// Optional website URL text input.
    Website,

    /// Submit button.
    Submit,
}

impl FormField {
    /// Returns the next field in tab order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            FormField::Email => FormField::Website,
            FormField::Website => FormField::Submit,
            FormField::Submit => FormField::Email,
        }
    }

    /// Returns the previous field in tab order, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            FormField::Email => FormField::Submit,
            FormField::Website => FormField::Email,
            FormField::Submit => FormField::Website,
        }
    }
}

/// Transient signup form input.
///
/// Exists for the duration of modal visibility; successful signups clear
/// the fields, everything else leaves them for the user to correct.
#[derive(Debug, Clone, Default)]
pub struct SignupFormState {
    /// Raw email input, trimmed only at submission time.
    pub email: String,

    /// Raw website input; optional, sent as an empty string when blank.
    pub website: String,

    /// Currently focused form field.
    pub focused_field: FormField,
}

/// Outcome state of the current or most recent submission attempt.
///
/// Reset at the start of each attempt; `message` holds whatever the user
/// should currently see inline in the form (validation error, server
/// message, or the generic transport message).
#[derive(Debug, Clone, Default)]
pub struct SubmissionState {
    /// A submission is in flight; the submit control is inert.
    pub is_loading: bool,

    /// The most recent attempt succeeded.
    pub is_success: bool,

    /// Inline message shown in the form, empty when there is nothing to say.
    pub message: String,
}

// =============================================================================
// Theme and Symbols
// =============================================================================

/// Theme configuration for the TUI.
///
/// For environments where colors should be disabled (per the `NO_COLOR`
/// standard), use [`Theme::monochrome()`] or [`Theme::from_env()`].
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent style for the headline highlight and the counter.
    pub accent: Style,
    /// Style for panel titles.
    pub title: Style,
    /// Style for form labels.
    pub label: Style,
    /// Style for the focused input field.
    pub input_focused: Style,
    /// Style for unfocused input fields.
    pub input_unfocused: Style,
    /// Style for the inline message after a successful signup.
    pub message_success: Style,
    /// Style for validation and failure messages.
    pub message_error: Style,
    /// Style for the big counter value.
    pub stat_value: Style,
    /// Style for the counter caption.
    pub stat_caption: Style,
    /// Style for unfocused borders.
    pub border: Style,
    /// Style for focused borders.
    pub border_focused: Style,
    /// Style for primary text.
    pub text_primary: Style,
    /// Style for secondary text.
    pub text_secondary: Style,
    /// Style for muted text.
    pub text_muted: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::White),
            input_focused: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            input_unfocused: Style::default().fg(Color::Gray),
            message_success: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            message_error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            stat_value: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            stat_caption: Style::default().fg(Color::Gray),
            border: Style::default().fg(Color::DarkGray),
            border_focused: Style::default().fg(Color::Cyan),
            text_primary: Style::default(),
            text_secondary: Style::default().fg(Color::Gray),
            text_muted: Style::default().fg(Color::DarkGray),
        }
    }
}

impl Theme {
    /// Creates a monochrome theme that uses only modifiers, complying with
    /// the [NO_COLOR standard](https://no-color.org/).
    #[must_use]
    pub fn monochrome() -> Self {
        Self {
            accent: Style::default().add_modifier(Modifier::BOLD),
            title: Style::default().add_modifier(Modifier::BOLD),
            label: Style::default(),
            input_focused: Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            input_unfocused: Style::default().add_modifier(Modifier::DIM),
            message_success: Style::default().add_modifier(Modifier::BOLD),
            message_error: Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            stat_value: Style::default().add_modifier(Modifier::BOLD),
            stat_caption: Style::default().add_modifier(Modifier::DIM),
            border: Style::default(),
            border_focused: Style::default().add_modifier(Modifier::BOLD),
            text_primary: Style::default(),
            text_secondary: Style::default().add_modifier(Modifier::DIM),
            text_muted: Style::default().add_modifier(Modifier::DIM),
        }
    }

    /// Returns [`Theme::monochrome()`] if `NO_COLOR` is set (to any value),
    /// [`Theme::default()`] otherwise.
    #[must_use]
    pub fn from_env() -> Self {
        if std::env::var("NO_COLOR").is_ok() {
            Self::monochrome()
        } else {
            Self::default()
        }
    }
}

/// Symbol set for the TUI (unicode or ASCII).
#[derive(Debug, Clone, Copy)]
pub struct Symbols {
    /// Symbol for success/completion.
    pub success: &'static str,
    /// Symbol for failure/error.
    pub failure: &'static str,
    /// Arrow symbol for the focused submit control.
    pub arrow: &'static str,
    /// Bullet point symbol for lists.
    pub bullet: &'static str,
}

/// Unicode symbol set for modern terminals.
pub const UNICODE_SYMBOLS: Symbols = Symbols {
    success: "✓",
    failure: "✗",
    arrow: "→",
    bullet: "•",
};

/// ASCII symbol set for limited terminals (Linux console, VT100).
pub const ASCII_SYMBOLS: Symbols = Symbols {
    success: "[+]",
    failure: "[x]",
    arrow: "->",
    bullet: "*",
};

impl Symbols {
    /// Detects the appropriate symbol set from the `TERM` environment
    /// variable: ASCII for `linux`/`vt100` terminals, unicode otherwise.
    #[must_use]
    pub fn detect() -> Self {
        if std::env::var("TERM")
            .map(|t| t.contains("linux") || t.contains("vt100"))
            .unwrap_or(false)
        {
            ASCII_SYMBOLS
        } else {
            UNICODE_SYMBOLS
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::detect()
    }
}

// =============================================================================
// Application State
// =============================================================================

/// State for the Waitline signup widget.
///
/// Owns everything the renderer needs: the last-known stats snapshot, the
/// modal form, the submission state machine, and presentation settings.
/// All mutation happens on the main task in response to [`UiEvent`]s.
///
/// # Example
///
/// ```
/// use waitline_widget::tui::app::AppState;
///
/// let mut state = AppState::new();
/// assert!(!state.show_form);
/// assert_eq!(state.stats.total_signups, 0);
///
/// state.open_form();
/// assert!(state.show_form);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Last-known aggregate signup count (last-write-wins).
    pub stats: StatsSnapshot,

    /// Signup form input and focus.
    pub form: SignupFormState,

    /// Current submission state machine position.
    pub submission: SubmissionState,

    /// Whether the signup modal is visible.
    pub show_form: bool,

    /// Flag indicating user requested exit.
    pub should_quit: bool,

    /// Theme configuration.
    pub theme: Theme,

    /// Symbol set (unicode or ASCII).
    pub symbols: Symbols,
}

impl AppState {
    /// Creates a new `AppState` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the application should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Signals that the application should quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Opens the signup modal.
    pub fn open_form(&mut self) {
        self.show_form = true;
    }

    /// Closes the signup modal. Form fields and the last message are kept;
    /// they belong to the submission state, not the modal lifetime.
    pub fn close_form(&mut self) {
        self.show_form = false;
    }

    /// Replaces the stats snapshot (startup fetch landing).
    ///
    /// Last-write-wins: a fast user submission may have already written a
    /// newer count, but both writers use the same rule so ordering races
    /// are harmless.
    pub fn apply_stats(&mut self, snapshot: StatsSnapshot) {
        self.stats = snapshot;
    }

    /// Starts a submission attempt from the current form fields.
    ///
    /// Resets the submission state, runs local validation, and returns the
    /// trimmed request to send when validation passes. Validation failures
    /// short-circuit before any network call: the inline message is set and
    /// `None` is returned. While a submission is already in flight the call
    /// is ignored entirely.
    pub fn begin_submission(&mut self) -> Option<SignupRequest> {
        if self.submission.is_loading {
            // Submit control is inert while a request is in flight.
            return None;
        }

        self.submission = SubmissionState {
            is_loading: true,
            is_success: false,
            message: String::new(),
        };

        if let Err(e) = validate_email(&self.form.email) {
            self.submission.is_loading = false;
            self.submission.message = e.to_string();
            return None;
        }

        Some(SignupRequest::from_form(&self.form.email, &self.form.website))
    }

    /// Reconciles a finished submission into display state.
    ///
    /// Returns `true` when the modal should auto-dismiss (successful
    /// signup), so the caller can schedule the delayed close.
    ///
    /// - Accepted signup: success state, server message, counter updated
    ///   from the response when it carried one, fields cleared.
    /// - Business failure (`success: false`): failure state, server message
    ///   verbatim, counter updated only when the response carried one,
    ///   fields kept.
    /// - Transport failure: failure state with the fixed generic message,
    ///   counter untouched.
    pub fn apply_submission(&mut self, outcome: Result<SignupResponse, ApiError>) -> bool {
        self.submission.is_loading = false;

        match outcome {
            Ok(response) => {
                self.submission.is_success = response.success;
                self.submission.message = response.message;

                if let Some(count) = response.total_signups {
                    self.stats = StatsSnapshot::now(count);
                }

                if self.submission.is_success {
                    self.form.email.clear();
                    self.form.website.clear();
                    return true;
                }
                false
            }
            Err(e) => {
                warn!(error = %e, "Signup submission failed");
                self.submission.is_success = false;
                self.submission.message = CONNECT_FAILURE_MESSAGE.to_string();
                false
            }
        }
    }

    /// Routes a key event, returning a request when a submission should be
    /// launched by the caller.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<SignupRequest> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        // Ctrl+C quits from anywhere, modal or not.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return None;
        }

        if self.show_form {
            self.handle_form_key(key)
        } else {
            self.handle_page_key(key);
            None
        }
    }

    /// Keys on the landing page.
    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('j') | KeyCode::Enter => self.open_form(),
            _ => {}
        }
    }

    /// Keys inside the signup modal. Enter submits from any field, matching
    /// how the form behaves in a browser.
    fn handle_form_key(&mut self, key: KeyEvent) -> Option<SignupRequest> {
        match key.code {
            KeyCode::Esc => {
                self.close_form();
                None
            }
            KeyCode::Tab | KeyCode::Down => {
                self.form.focused_field = self.form.focused_field.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focused_field = self.form.focused_field.prev();
                None
            }
            KeyCode::Enter => self.begin_submission(),
            KeyCode::Backspace => {
                match self.form.focused_field {
                    FormField::Email => {
                        self.form.email.pop();
                    }
                    FormField::Website => {
                        self.form.website.pop();
                    }
                    FormField::Submit => {}
                }
                None
            }
            KeyCode::Char(c) => {
                match self.form.focused_field {
                    FormField::Email => self.form.email.push(c),
                    FormField::Website => self.form.website.push(c),
                    FormField::Submit => {}
                }
                None
            }
            _ => None,
        }
    }
}

// =============================================================================
// Events and Event Handler
// =============================================================================

/// Events that drive the TUI event loop.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick for redraws.
    Tick,

    /// Terminal input event.
    Key(KeyEvent),

    /// Terminal resize event (columns, rows).
    Resize(u16, u16),

    /// Startup stats fetch landed.
    StatsLoaded(StatsSnapshot),

    /// A spawned submission task finished.
    SubmissionFinished(Result<SignupResponse, ApiError>),

    /// Delayed auto-dismiss of the modal after a successful signup.
    CloseForm,
}

/// Default tick rate for the event handler (60ms, roughly 16 FPS).
pub const DEFAULT_TICK_RATE_MS: u64 = 60;

/// Poll timeout for checking terminal input.
const DEFAULT_POLL_TIMEOUT_MS: u64 = 10;

/// Handles terminal input and generates periodic tick events.
///
/// Runs an async loop that multiplexes three sources with `tokio::select!`:
/// a tick interval, crossterm polling (via `spawn_blocking`, since the
/// crossterm calls are synchronous), and a shutdown oneshot. All events are
/// delivered to the main task over an MPSC channel.
///
/// # Example
///
/// ```ignore
/// use tokio::sync::{mpsc, oneshot};
/// use waitline_widget::tui::app::EventHandler;
///
/// let (event_tx, mut event_rx) = mpsc::channel(100);
/// let (shutdown_tx, shutdown_rx) = oneshot::channel();
///
/// tokio::spawn(EventHandler::new(event_tx, shutdown_rx).run());
///
/// while let Some(event) = event_rx.recv().await {
///     // handle the event...
/// }
/// let _ = shutdown_tx.send(());
/// ```
#[derive(Debug)]
pub struct EventHandler {
    event_tx: mpsc::Sender<UiEvent>,
    shutdown_rx: oneshot::Receiver<()>,
    tick_rate: Duration,
}

impl EventHandler {
    /// Creates a new `EventHandler` with the default tick rate.
    pub fn new(event_tx: mpsc::Sender<UiEvent>, shutdown_rx: oneshot::Receiver<()>) -> Self {
        Self {
            event_tx,
            shutdown_rx,
            tick_rate: Duration::from_millis(DEFAULT_TICK_RATE_MS),
        }
    }

    /// Runs the event loop until a shutdown signal is received or every
    /// receiver is gone.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal polling task panics.
    pub async fn run(mut self) -> std::io::Result<()> {
        let mut tick_interval = tokio::time::interval(self.tick_rate);
        tick_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Burst);
        tick_interval.tick().await; // intervals fire immediately on creation

        loop {
            tokio::select! {
                biased;

                _ = &mut self.shutdown_rx => {
                    tracing::debug!("EventHandler received shutdown signal");
                    break;
                }

                _ = tick_interval.tick() => {
                    if self.event_tx.send(UiEvent::Tick).await.is_err() {
                        tracing::debug!("Event receiver dropped, exiting event loop");
                        break;
                    }
                }

                result = async {
                    tokio::time::sleep(Duration::from_millis(DEFAULT_POLL_TIMEOUT_MS)).await;
                    tokio::task::spawn_blocking(|| {
                        Self::poll_terminal_event(Duration::from_millis(DEFAULT_POLL_TIMEOUT_MS))
                    }).await
                } => {
                    match result {
                        Ok(Some(event)) => {
                            if self.event_tx.send(event).await.is_err() {
                                tracing::debug!("Event receiver dropped, exiting event loop");
                                break;
                            }
                        }
                        Ok(None) => {}
                        Err(join_error) => {
                            tracing::error!("spawn_blocking task panicked: {}", join_error);
                            return Err(std::io::Error::other("Terminal polling task panicked"));
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Polls for a terminal event, treating poll failures as "no event" so
    /// non-terminal environments (CI, tests) keep ticking.
    fn poll_terminal_event(timeout: Duration) -> Option<UiEvent> {
        match event::poll(timeout) {
            Ok(true) => match event::read() {
                Ok(crossterm_event) => Self::convert_crossterm_event(crossterm_event),
                Err(e) => {
                    tracing::trace!("Failed to read terminal event: {}", e);
                    None
                }
            },
            Ok(false) => None,
            Err(e) => {
                tracing::trace!("Failed to poll terminal: {}", e);
                None
            }
        }
    }

    /// Converts a crossterm event; mouse, focus, and paste events are not
    /// handled.
    fn convert_crossterm_event(event: CrosstermEvent) -> Option<UiEvent> {
        match event {
            CrosstermEvent::Key(key_event) => Some(UiEvent::Key(key_event)),
            CrosstermEvent::Resize(cols, rows) => Some(UiEvent::Resize(cols, rows)),
            _ => None,
        }
    }
}

//! Signup form widget for the waitlist modal.
//!
//! This module provides the [`SignupFormWidget`] for rendering the modal
//! signup form, plus [`validate_email`], the local validation that runs
//! before any network call. The form collects:
//!
//! - **Email**: required
//! - **Website**: optional URL
//!
//! # Layout
//!
//! The form renders as a centered panel over a dimmed landing page:
//!
//! ```text
//! ┌──────────── Join the Waitlist ────────────┐
//! │  Email:                                   │
//! │  ┌─────────────────────────────────────┐  │
//! │  │ your@email.com█                     │  │
//! │  └─────────────────────────────────────┘  │
//! │  Website (optional):                      │
//! │  ┌─────────────────────────────────────┐  │
//! │  │ https://yourwebsite.com             │  │
//! │  └─────────────────────────────────────┘  │
//! │                                           │
//! │          [ Join the Movement ]            │
//! │                                           │
//! │  ✓ Successfully joined the waitlist!      │
//! │  Esc to close                             │
//! └───────────────────────────────────────────┘
//! ```
//!
//! The submit control shows `Joining...` while a submission is in flight,
//! and the message line carries validation errors, server messages, or the
//! generic transport message, styled by outcome.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::error::ValidationError;
use crate::tui::app::{FormField, SignupFormState, SubmissionState, Symbols, Theme};

/// Validates a raw email input before submission.
///
/// Returns `Ok(())` when the trimmed input is non-empty and contains both an
/// `@` and a `.`. Only obvious slips are caught here, before spending a
/// network round-trip; full validation belongs to the backend.
///
/// # Examples
///
/// ```
/// use waitline_widget::tui::widgets::validate_email;
///
/// assert!(validate_email("a@b.com").is_ok());
/// assert!(validate_email("  a@b.com  ").is_ok());
///
/// assert!(validate_email("").is_err());
/// assert!(validate_email("missing-at.com").is_err());
/// assert!(validate_email("missing@dotcom").is_err());
/// ```
pub fn validate_email(raw: &str) -> Result<(), ValidationError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }

    if !trimmed.contains('@') || !trimmed.contains('.') {
        return Err(ValidationError::MalformedEmail);
    }

    Ok(())
}

/// Label on the submit control when idle.
const SUBMIT_LABEL: &str = "Join the Movement";

/// Label on the submit control while a submission is in flight.
const SUBMIT_LOADING_LABEL: &str = "Joining...";

/// Minimum width for the form panel.
const MIN_FORM_WIDTH: u16 = 40;

/// Maximum width for the form panel.
const MAX_FORM_WIDTH: u16 = 60;

/// Height of the form content (excluding outer border).
const FORM_CONTENT_HEIGHT: u16 = 12;

/// Returns the submit control label for the given loading state.
#[must_use]
pub fn submit_label(is_loading: bool) -> &'static str {
    if is_loading {
        SUBMIT_LOADING_LABEL
    } else {
        SUBMIT_LABEL
    }
}

/// Widget for rendering the signup modal.
///
/// Stateless: takes references to form state, submission state, and styling,
/// and implements [`Widget`]. The underlying area is cleared first so the
/// modal reads as an overlay.
#[derive(Debug)]
pub struct SignupFormWidget<'a> {
    form: &'a SignupFormState,
    submission: &'a SubmissionState,
    theme: &'a Theme,
    symbols: &'a Symbols,
}

impl<'a> SignupFormWidget<'a> {
    /// Creates a new `SignupFormWidget`.
    #[must_use]
    pub fn new(
        form: &'a SignupFormState,
        submission: &'a SubmissionState,
        theme: &'a Theme,
        symbols: &'a Symbols,
    ) -> Self {
        Self {
            form,
            submission,
            theme,
            symbols,
        }
    }

    /// Calculates the centered area for the modal panel.
    fn centered_rect(&self, area: Rect) -> Rect {
        let form_width = area.width.clamp(MIN_FORM_WIDTH, MAX_FORM_WIDTH);
        let form_height = FORM_CONTENT_HEIGHT + 2; // +2 for borders

        let x = area.x + area.width.saturating_sub(form_width) / 2;
        let y = area.y + area.height.saturating_sub(form_height) / 2;

        Rect::new(
            x,
            y,
            form_width.min(area.width),
            form_height.min(area.height),
        )
    }

    /// Renders a labelled, bordered text input (label row + 3-row input box).
    fn render_text_input(&self, buf: &mut Buffer, area: Rect, label: &str, value: &str, field: FormField) {
        let is_focused = self.form.focused_field == field;

        let label_style = if is_focused {
            self.theme.label.add_modifier(Modifier::BOLD)
        } else {
            self.theme.label
        };

        let border_style = if is_focused {
            self.theme.border_focused
        } else {
            self.theme.border
        };

        let input_style = if is_focused {
            self.theme.input_focused
        } else {
            self.theme.input_unfocused
        };

        // Trailing cursor marker on the focused input.
        let input_text = if is_focused {
            format!("{value}_")
        } else {
            value.to_string()
        };

        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(3)]).split(area);

        Paragraph::new(label).style(label_style).render(chunks[0], buf);
        Paragraph::new(input_text)
            .style(input_style)
            .block(Block::default().borders(Borders::ALL).border_style(border_style))
            .render(chunks[1], buf);
    }

    /// Renders the submit control.
    fn render_submit(&self, buf: &mut Buffer, area: Rect) {
        let is_focused = self.form.focused_field == FormField::Submit;

        let style = if self.submission.is_loading {
            self.theme.text_muted
        } else if is_focused {
            self.theme
                .input_focused
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            self.theme.input_unfocused
        };

        let label = submit_label(self.submission.is_loading);
        let text = if is_focused && !self.submission.is_loading {
            format!(" {} {label} {} ", self.symbols.arrow, self.symbols.arrow)
        } else {
            format!("[ {label} ]")
        };

        Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    /// Renders the outcome message line, if there is anything to show.
    fn render_message(&self, buf: &mut Buffer, area: Rect) {
        if self.submission.message.is_empty() {
            return;
        }

        let (symbol, style) = if self.submission.is_success {
            (self.symbols.success, self.theme.message_success)
        } else {
            (self.symbols.failure, self.theme.message_error)
        };

        let line = Line::from(vec![
            Span::styled(symbol, style),
            Span::raw(" "),
            Span::styled(self.submission.message.as_str(), style),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for SignupFormWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let form_area = self.centered_rect(area);

        // Clear whatever the landing page drew underneath the modal.
        Clear.render(form_area, buf);

        let outer_block = Block::default()
            .title(" Join the Waitlist ")
            .title_alignment(Alignment::Center)
            .title_style(self.theme.title)
            .borders(Borders::ALL)
            .border_style(self.theme.border_focused);

        let inner = outer_block.inner(form_area);
        outer_block.render(form_area, buf);

        if inner.width < 20 || inner.height < FORM_CONTENT_HEIGHT {
            Paragraph::new("Terminal too small")
                .style(self.theme.message_error)
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Length(4), // email label + input
            Constraint::Length(4), // website label + input
            Constraint::Length(1), // spacer
            Constraint::Length(1), // submit control
            Constraint::Length(1), // message
            Constraint::Length(1), // hint
        ])
        .split(inner);

        self.render_text_input(buf, chunks[0], "Email:", &self.form.email, FormField::Email);
        self.render_text_input(
            buf,
            chunks[1],
            "Website (optional):",
            &self.form.website,
            FormField::Website,
        );
        self.render_submit(buf, chunks[3]);
        self.render_message(buf, chunks[4]);

        Paragraph::new("Tab to move, Enter to submit, Esc to close")
            .style(self.theme.text_muted)
            .alignment(Alignment::Center)
            .render(chunks[5], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn empty_email_is_required() {
        assert_eq!(validate_email(""), Err(ValidationError::EmptyEmail));
    }

    #[test]
    fn whitespace_only_email_is_required() {
        assert_eq!(validate_email("   \t  "), Err(ValidationError::EmptyEmail));
    }

    #[test]
    fn email_missing_at_is_malformed() {
        assert_eq!(
            validate_email("johnfoo.com"),
            Err(ValidationError::MalformedEmail)
        );
    }

    #[test]
    fn email_missing_dot_is_malformed() {
        assert_eq!(
            validate_email("john@foocom"),
            Err(ValidationError::MalformedEmail)
        );
    }

    #[test]
    fn email_missing_both_is_malformed() {
        assert_eq!(
            validate_email("johnfoocom"),
            Err(ValidationError::MalformedEmail)
        );
    }

    #[test]
    fn plausible_email_passes() {
        assert!(validate_email("john@foo.com").is_ok());
        assert!(validate_email("  john@foo.com  ").is_ok());
    }

    #[test]
    fn loose_check_accepts_odd_shapes() {
        // Only '@' and '.' are checked; the backend owns the rest.
        assert!(validate_email("@.").is_ok());
        assert!(validate_email("a@b.c@d").is_ok());
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    fn render_to_string(widget: SignupFormWidget<'_>, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);

        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn renders_labels_and_submit_control() {
        let form = SignupFormState::default();
        let submission = SubmissionState::default();
        let theme = Theme::default();
        let symbols = crate::tui::app::UNICODE_SYMBOLS;

        let rendered = render_to_string(
            SignupFormWidget::new(&form, &submission, &theme, &symbols),
            80,
            24,
        );

        assert!(rendered.contains("Join the Waitlist"));
        assert!(rendered.contains("Email:"));
        assert!(rendered.contains("Website (optional):"));
        assert!(rendered.contains("Join the Movement"));
    }

    #[test]
    fn loading_submission_shows_joining_label() {
        let form = SignupFormState::default();
        let submission = SubmissionState {
            is_loading: true,
            ..Default::default()
        };
        let theme = Theme::default();
        let symbols = crate::tui::app::UNICODE_SYMBOLS;

        let rendered = render_to_string(
            SignupFormWidget::new(&form, &submission, &theme, &symbols),
            80,
            24,
        );

        assert!(rendered.contains("Joining..."));
        assert!(!rendered.contains("Join the Movement"));
    }

    #[test]
    fn message_line_is_rendered() {
        let form = SignupFormState::default();
        let submission = SubmissionState {
            is_loading: false,
            is_success: false,
            message: "Email is required".to_string(),
        };
        let theme = Theme::default();
        let symbols = crate::tui::app::UNICODE_SYMBOLS;

        let rendered = render_to_string(
            SignupFormWidget::new(&form, &submission, &theme, &symbols),
            80,
            24,
        );

        assert!(rendered.contains("Email is required"));
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let form = SignupFormState::default();
        let submission = SubmissionState::default();
        let theme = Theme::default();
        let symbols = crate::tui::app::ASCII_SYMBOLS;

        let _ = render_to_string(
            SignupFormWidget::new(&form, &submission, &theme, &symbols),
            10,
            5,
        );
    }

    #[test]
    fn submit_label_reflects_loading() {
        assert_eq!(submit_label(false), "Join the Movement");
        assert_eq!(submit_label(true), "Joining...");
    }
}

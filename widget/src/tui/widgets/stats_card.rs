//! Signup counter card for the Waitline landing page.
//!
//! Displays the last-known aggregate signup count with a caption and a
//! refreshed-at line. The count is whatever the most recent response said
//! (startup stats fetch or a signup response); 0 is shown until anything
//! lands.
//!
//! # Layout
//!
//! ```text
//! ┌───────────────────────────────┐
//! │             1024              │
//! │        Websites Joined        │
//! │     updated 12:03:45 UTC      │
//! └───────────────────────────────┘
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::tui::app::Theme;
use crate::types::StatsSnapshot;

/// Caption under the counter.
const CAPTION: &str = "Websites Joined";

/// Shown on the refreshed-at line until a fetch has landed.
const AWAITING_REFRESH: &str = "awaiting first refresh";

/// Height of the stats card in rows, including borders.
pub const STATS_CARD_HEIGHT: u16 = 5;

/// Widget for displaying the signup counter card.
///
/// Stateless; takes references to the snapshot and theme and implements
/// [`Widget`].
#[derive(Debug)]
pub struct StatsCardWidget<'a> {
    snapshot: &'a StatsSnapshot,
    theme: &'a Theme,
}

impl<'a> StatsCardWidget<'a> {
    /// Creates a new `StatsCardWidget`.
    #[must_use]
    pub fn new(snapshot: &'a StatsSnapshot, theme: &'a Theme) -> Self {
        Self { snapshot, theme }
    }

    /// Formats the refreshed-at line.
    fn refreshed_line(&self) -> String {
        match self.snapshot.fetched_at {
            Some(at) => format!("updated {} UTC", at.format("%H:%M:%S")),
            None => AWAITING_REFRESH.to_string(),
        }
    }
}

impl Widget for StatsCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Length(1), // count
            Constraint::Length(1), // caption
            Constraint::Length(1), // refreshed-at
        ])
        .split(inner);

        Paragraph::new(self.snapshot.total_signups.to_string())
            .style(self.theme.stat_value)
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        if inner.height >= 2 {
            Paragraph::new(CAPTION)
                .style(self.theme.stat_caption)
                .alignment(Alignment::Center)
                .render(chunks[1], buf);
        }

        if inner.height >= 3 {
            Paragraph::new(self.refreshed_line())
                .style(self.theme.text_muted)
                .alignment(Alignment::Center)
                .render(chunks[2], buf);
        }
    }
}

//! Hero panel for the Waitline landing page.
//!
//! Renders the headline, tagline, and call-to-action hint. The headline
//! splits onto two lines on narrow terminals; below that, everything stays
//! centered and degrades by truncation.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::tui::app::{Symbols, Theme};

/// Width threshold for the single-line headline.
const WIDE_LAYOUT_THRESHOLD: u16 = 80;

const TAGLINE: &str =
    "Join the movement to protect your content and get paid when AI companies use it.";

const CTA_HINT: &str = "Press Enter to join the waitlist, q to quit";

/// Returns the height needed for the hero panel at the given width,
/// including borders.
#[must_use]
pub fn hero_height(area_width: u16) -> u16 {
    if area_width >= WIDE_LAYOUT_THRESHOLD {
        7 // headline, spacer, tagline, spacer, hint + borders
    } else {
        8 // headline wraps to two lines
    }
}

/// Widget for the landing page hero.
#[derive(Debug)]
pub struct HeroWidget<'a> {
    theme: &'a Theme,
    symbols: &'a Symbols,
}

impl<'a> HeroWidget<'a> {
    /// Creates a new `HeroWidget`.
    #[must_use]
    pub fn new(theme: &'a Theme, symbols: &'a Symbols) -> Self {
        Self { theme, symbols }
    }

    /// Headline lines, one or two depending on width.
    fn headline(&self, width: u16) -> Vec<Line<'a>> {
        if width >= WIDE_LAYOUT_THRESHOLD {
            vec![Line::from(vec![
                Span::styled("Websites Deserve ", self.theme.title),
                Span::styled("Fair Pay", self.theme.accent),
                Span::styled(" for AI Training", self.theme.title),
            ])]
        } else {
            vec![
                Line::from(vec![
                    Span::styled("Websites Deserve ", self.theme.title),
                    Span::styled("Fair Pay", self.theme.accent),
                ]),
                Line::from(Span::styled("for AI Training", self.theme.title)),
            ]
        }
    }
}

impl Widget for HeroWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Waitline ")
            .title_style(self.theme.title)
            .borders(Borders::ALL)
            .border_style(self.theme.border);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let headline = self.headline(area.width);
        let headline_height = headline.len() as u16;

        let chunks = Layout::vertical([
            Constraint::Length(headline_height),
            Constraint::Length(1), // spacer
            Constraint::Length(1), // tagline
            Constraint::Length(1), // spacer
            Constraint::Length(1), // hint
        ])
        .split(inner);

        Paragraph::new(headline)
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        if inner.height > headline_height + 1 {
            Paragraph::new(TAGLINE)
                .style(self.theme.text_secondary)
                .alignment(Alignment::Center)
                .render(chunks[2], buf);
        }

        if inner.height > headline_height + 3 {
            let hint = Line::from(vec![
                Span::styled(self.symbols.bullet, self.theme.accent),
                Span::raw(" "),
                Span::styled(CTA_HINT, self.theme.text_muted),
            ]);
            Paragraph::new(hint)
                .alignment(Alignment::Center)
                .render(chunks[4], buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::UNICODE_SYMBOLS;

    fn render_to_string(widget: HeroWidget<'_>, width: u16, height: u16) -> String {
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
    fn hero_height_adapts_to_width() {
        assert_eq!(hero_height(100), 7);
        assert_eq!(hero_height(60), 8);
    }

    #[test]
    fn wide_layout_has_single_headline_line() {
        let theme = Theme::default();
        let rendered = render_to_string(
            HeroWidget::new(&theme, &UNICODE_SYMBOLS),
            100,
            hero_height(100),
        );

        assert!(rendered.contains("Websites Deserve Fair Pay for AI Training"));
        assert!(rendered.contains("Press Enter to join the waitlist"));
    }

    #[test]
    fn narrow_layout_splits_headline() {
        let theme = Theme::default();
        let rendered = render_to_string(
            HeroWidget::new(&theme, &UNICODE_SYMBOLS),
            50,
            hero_height(50),
        );

        assert!(rendered.contains("Websites Deserve Fair Pay"));
        assert!(rendered.contains("for AI Training"));
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let theme = Theme::default();
        let _ = render_to_string(HeroWidget::new(&theme, &UNICODE_SYMBOLS), 10, 2);
    }
}

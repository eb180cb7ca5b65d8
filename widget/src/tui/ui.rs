//! Frame composition for the Waitline TUI.
//!
//! A single landing page: hero panel on top, the signup counter card
//! beneath it, and the modal form rendered over everything when visible.
//! All widgets take their state by reference, so this module is a pure
//! function of [`AppState`].

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

use crate::tui::app::AppState;
use crate::tui::widgets::{hero_height, HeroWidget, SignupFormWidget, StatsCardWidget};

/// Maximum width of the centered stats card.
const STATS_CARD_MAX_WIDTH: u16 = 40;

/// Renders one frame of the widget.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(hero_height(area.width)),
        Constraint::Length(crate::tui::widgets::STATS_CARD_HEIGHT),
        Constraint::Min(0),
    ])
    .split(area);

    frame.render_widget(HeroWidget::new(&state.theme, &state.symbols), chunks[0]);
    frame.render_widget(
        StatsCardWidget::new(&state.stats, &state.theme),
        centered_card(chunks[1]),
    );

    if state.show_form {
        frame.render_widget(
            SignupFormWidget::new(
                &state.form,
                &state.submission,
                &state.theme,
                &state.symbols,
            ),
            area,
        );
    }
}

/// Centers the stats card horizontally within its row.
fn centered_card(area: Rect) -> Rect {
    let width = area.width.min(STATS_CARD_MAX_WIDTH);
    let x = area.x + area.width.saturating_sub(width) / 2;
    Rect::new(x, area.y, width, area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_card_is_clamped_and_centered() {
        let area = Rect::new(0, 7, 100, 5);
        let card = centered_card(area);

        assert_eq!(card.width, STATS_CARD_MAX_WIDTH);
        assert_eq!(card.x, 30);
        assert_eq!(card.y, 7);
    }

    #[test]
    fn centered_card_fits_narrow_area() {
        let area = Rect::new(0, 7, 20, 5);
        let card = centered_card(area);

        assert_eq!(card.width, 20);
        assert_eq!(card.x, 0);
    }
}

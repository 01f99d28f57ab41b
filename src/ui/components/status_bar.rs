//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::constants::{HINTS_INPUT, HINTS_LIST, HINTS_LIST_NO_COMPLETION};
use crate::ui::core::Focus;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Text shown for the given counts and focus
    #[must_use]
    pub fn status_text(total: usize, completed: usize, focus: Focus, allow_completion: bool) -> String {
        let hints = match focus {
            Focus::Input => HINTS_INPUT,
            Focus::List if allow_completion => HINTS_LIST,
            Focus::List => HINTS_LIST_NO_COMPLETION,
        };

        if allow_completion {
            format!("{total} items, {completed} done | {hints}")
        } else {
            format!("{total} items | {hints}")
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, total: usize, completed: usize, focus: Focus, allow_completion: bool) {
        let status_bar = Paragraph::new(Self::status_text(total, completed, focus, allow_completion))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));

        f.render_widget(status_bar, area);
    }
}

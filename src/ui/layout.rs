//! Layout management and calculations

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas of the main view, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainAreas {
    pub title: Rect,
    pub input: Rect,
    pub list: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into title, input box, list and status bar
    #[must_use]
    pub fn main_layout(area: Rect) -> MainAreas {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

        MainAreas {
            title: chunks[0],
            input: chunks[1],
            list: chunks[2],
            status: chunks[3],
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

        Layout::horizontal([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
    }
}

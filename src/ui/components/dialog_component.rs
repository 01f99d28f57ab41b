use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS, DIALOG_TITLE_REMOVE};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::core::{Action, Component, DialogType};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

/// Modal dialog component.
///
/// Hosts the help panel, the logs view and the remove confirmation. While a
/// dialog is visible it receives every key event.
pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    pub logger: Option<Logger>,
    pub allow_completion: bool,
    pub icons: IconService,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            logger: None,
            allow_completion: true,
            icons: IconService::default(),
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn show(&mut self, dialog_type: DialogType) {
        self.dialog_type = Some(dialog_type);
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    pub fn hide(&mut self) {
        self.dialog_type = None;
        self.scroll_offset = 0;
    }

    fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    fn handle_scroll_keys(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(10),
            KeyCode::PageDown => self.scroll_down(10),
            KeyCode::Home => self.scroll_offset = 0,
            // Clamped against the content length when rendering
            KeyCode::End => self.scroll_offset = usize::MAX,
            _ => {}
        }
        Action::None
    }

    fn help_lines(&self) -> Vec<String> {
        let mut lines = vec![
            "INPUT".to_string(),
            "-----".to_string(),
            "Type        Edit the new todo".to_string(),
            "Enter       Add the todo (blank text is ignored)".to_string(),
            "Tab/Esc     Move to the list".to_string(),
            String::new(),
            "LIST".to_string(),
            "----".to_string(),
            "j/k ↓/↑     Move selection".to_string(),
            "g/Home End  Jump to first/last".to_string(),
        ];
        if self.allow_completion {
            lines.push("Space/x     Toggle completed".to_string());
        }
        lines.extend([
            "d/Delete    Remove todo".to_string(),
            "Tab/Esc/i/a Back to the input".to_string(),
            String::new(),
            "GENERAL".to_string(),
            "-------".to_string(),
            "?           Toggle this help".to_string(),
            "G           Show logs".to_string(),
            "t           Cycle icon theme".to_string(),
            "q           Quit (from the list)".to_string(),
            "Ctrl+C      Quit".to_string(),
        ]);
        if self.allow_completion {
            lines.extend([
                String::new(),
                format!("{}  Pending", self.icons.todo_pending()),
                format!("{}  Completed", self.icons.todo_completed()),
            ]);
        }
        lines
    }

    fn log_lines(&self) -> Vec<String> {
        let logs = self.logger.as_ref().map(Logger::get_logs).unwrap_or_default();
        if logs.is_empty() {
            vec!["No logs available".to_string()]
        } else {
            logs
        }
    }

    fn render_scrollable(&mut self, f: &mut Frame, area: Rect, title: String, lines: &[String]) {
        let dialog_area = LayoutManager::centered_rect(80, 80, area);
        f.render_widget(Clear, dialog_area);

        let total_lines = lines.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;
        let max_scroll = total_lines.saturating_sub(visible_height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        self.scrollbar_state = self
            .scrollbar_state
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(self.scroll_offset);

        let visible = lines
            .iter()
            .skip(self.scroll_offset)
            .take(visible_height)
            .cloned()
            .collect::<Vec<_>>()
            .join("\n");

        let paragraph = Paragraph::new(visible)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::White));
        f.render_widget(paragraph, dialog_area);

        if total_lines > visible_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .style(Style::default().fg(Color::Gray));
            f.render_stateful_widget(scrollbar, dialog_area, &mut self.scrollbar_state);
        }
    }

    fn render_remove_confirmation(&self, f: &mut Frame, area: Rect, text: &str) {
        let dialog_area = LayoutManager::centered_rect(60, 30, area);
        f.render_widget(Clear, dialog_area);

        let preview: String = if text.chars().count() > 40 {
            format!("{}...", text.chars().take(37).collect::<String>())
        } else {
            text.to_string()
        };

        let body = format!("Remove this todo?\n\n\"{preview}\"\n\nPress 'y' to confirm or 'n'/Esc to cancel");
        let paragraph = Paragraph::new(body)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} {}", self.icons.warning(), DIALOG_TITLE_REMOVE))
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, dialog_area);
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                _ => self.handle_scroll_keys(key),
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => self.handle_scroll_keys(key),
            },
            Some(DialogType::RemoveConfirmation { id, .. }) => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    let id = *id;
                    self.hide();
                    Action::RemoveTodo(id)
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::HideDialog,
                _ => Action::None,
            },
            None => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.show(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.hide();
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.dialog_type.clone() {
            Some(DialogType::Help) => {
                let title = format!("{} {}", self.icons.help(), DIALOG_TITLE_HELP);
                let lines = self.help_lines();
                self.render_scrollable(f, rect, title, &lines);
            }
            Some(DialogType::Logs) => {
                let title = format!("{} {}", self.icons.logs(), DIALOG_TITLE_LOGS);
                let lines = self.log_lines();
                self.render_scrollable(f, rect, title, &lines);
            }
            Some(DialogType::RemoveConfirmation { text, .. }) => {
                self.render_remove_confirmation(f, rect, &text);
            }
            None => {}
        }
    }
}

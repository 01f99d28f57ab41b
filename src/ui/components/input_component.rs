//! Input box for new todos.
//!
//! The component edits a local copy of the pending input and reports every
//! edit as [`Action::InputChanged`]; the app writes it to the store and
//! feeds the store's value back through [`InputComponent::set_value`].

use crate::icons::IconService;
use crate::ui::core::{Action, Component, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct InputComponent {
    pub value: String,
    /// Cursor position in characters, not bytes
    pub cursor_position: usize,
    pub placeholder: String,
    pub focused: bool,
    pub icons: IconService,
}

impl Default for InputComponent {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl InputComponent {
    pub fn new(placeholder: String) -> Self {
        Self {
            value: String::new(),
            cursor_position: 0,
            placeholder,
            focused: true,
            icons: IconService::default(),
        }
    }

    /// Replace the displayed value, keeping the cursor inside it.
    pub fn set_value(&mut self, value: &str) {
        if self.value != value {
            self.value = value.to_string();
        }
        self.cursor_position = self.cursor_position.min(self.char_count());
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Display width of the text before the cursor
    pub fn cursor_column(&self) -> usize {
        let prefix = &self.value[..self.byte_offset(self.cursor_position)];
        Line::from(prefix).width()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(offset, _)| offset)
    }

    fn insert_char(&mut self, c: char) -> Action {
        let byte_pos = self.byte_offset(self.cursor_position);
        self.value.insert(byte_pos, c);
        self.cursor_position += 1;
        Action::InputChanged(self.value.clone())
    }

    fn delete_before_cursor(&mut self) -> Action {
        if self.cursor_position == 0 {
            return Action::None;
        }
        let byte_pos = self.byte_offset(self.cursor_position - 1);
        self.value.remove(byte_pos);
        self.cursor_position -= 1;
        Action::InputChanged(self.value.clone())
    }

    fn delete_at_cursor(&mut self) -> Action {
        if self.cursor_position >= self.char_count() {
            return Action::None;
        }
        let byte_pos = self.byte_offset(self.cursor_position);
        self.value.remove(byte_pos);
        Action::InputChanged(self.value.clone())
    }
}

impl Component for InputComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::SubmitInput,
            KeyCode::Tab | KeyCode::Esc | KeyCode::Down => Action::Focus(Focus::List),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => self.insert_char(c),
            KeyCode::Backspace => self.delete_before_cursor(),
            KeyCode::Delete => self.delete_at_cursor(),
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                Action::None
            }
            KeyCode::Right => {
                if self.cursor_position < self.char_count() {
                    self.cursor_position += 1;
                }
                Action::None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor_position = self.char_count();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let paragraph = if self.value.is_empty() {
            Paragraph::new(self.placeholder.as_str())
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
        } else {
            Paragraph::new(self.value.as_str()).style(Style::default().fg(Color::White))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!("{} New todo", self.icons.input()));
        f.render_widget(paragraph.block(block), rect);

        if self.focused {
            let max_x = rect.width.saturating_sub(2);
            let cursor_x = u16::try_from(self.cursor_column()).unwrap_or(u16::MAX).min(max_x);
            f.set_cursor_position((rect.x + 1 + cursor_x, rect.y + 1));
        }
    }
}

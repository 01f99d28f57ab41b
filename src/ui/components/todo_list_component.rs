use crate::config::DisplayConfig;
use crate::constants::EMPTY_LIST_MESSAGE;
use crate::icons::IconService;
use crate::store::{StoreChange, TodoItem};
use crate::ui::core::{Action, Component, DialogType, Focus};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::fmt::Write as _;

pub struct TodoListComponent {
    pub items: Vec<TodoItem>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub focused: bool,
    pub allow_completion: bool,
    pub confirm_remove: bool,
    pub display_config: DisplayConfig,
    pub icons: IconService,
}

impl Default for TodoListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoListComponent {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            focused: false,
            allow_completion: true,
            confirm_remove: false,
            display_config: DisplayConfig::default(),
            icons: IconService::default(),
        }
    }

    pub fn update_data(&mut self, items: Vec<TodoItem>) {
        self.items = items;
        self.update_list_state();
    }

    /// Keep the selection on the same item when rows above it disappear.
    pub fn apply_change(&mut self, change: &StoreChange) {
        if let StoreChange::Removed { index, .. } = change {
            if *index < self.selected_index {
                self.selected_index -= 1;
            }
        }
    }

    pub fn selected_item(&self) -> Option<&TodoItem> {
        self.items.get(self.selected_index)
    }

    fn update_list_state(&mut self) {
        if self.items.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.items.len() {
                self.selected_index = self.items.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn next(&mut self) {
        if !self.items.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.items.len();
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn previous(&mut self) {
        if !self.items.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.items.len() - 1
            } else {
                self.selected_index - 1
            };
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select(&mut self, index: usize) {
        if !self.items.is_empty() {
            self.selected_index = index.min(self.items.len() - 1);
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn toggle_selected(&self) -> Action {
        if !self.allow_completion {
            return Action::None;
        }
        self.selected_item()
            .map_or(Action::None, |item| Action::ToggleTodo(item.id))
    }

    fn remove_selected(&self) -> Action {
        match self.selected_item() {
            Some(item) if self.confirm_remove => Action::ShowDialog(DialogType::RemoveConfirmation {
                id: item.id,
                text: item.text.clone(),
            }),
            Some(item) => Action::RemoveTodo(item.id),
            None => Action::None,
        }
    }

    fn timestamp(&self, item: &TodoItem) -> Option<String> {
        if !self.display_config.show_timestamps {
            return None;
        }
        let local = item.created_at.with_timezone(&chrono::Local);
        let mut rendered = String::new();
        write!(rendered, "{}", local.format(&self.display_config.timestamp_format)).ok()?;
        Some(rendered)
    }

    fn render_item(&self, index: usize, item: &TodoItem) -> ListItem<'static> {
        let selected = self.focused && index == self.selected_index;

        let base_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if item.completed {
            Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::White)
        };

        let content_style = if item.completed {
            base_style.add_modifier(Modifier::CROSSED_OUT)
        } else {
            base_style
        };

        let mut spans = Vec::new();
        if self.allow_completion {
            spans.push(Span::styled(format!("{} ", self.icons.todo_status(item.completed)), base_style));
        }
        spans.push(Span::styled(item.text.clone(), content_style));
        if let Some(stamp) = self.timestamp(item) {
            spans.push(Span::styled(format!("  {stamp}"), Style::default().fg(Color::DarkGray)));
        }

        ListItem::new(Line::from(spans))
    }
}

impl Component for TodoListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.next();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous();
                Action::None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.select(0);
                Action::None
            }
            KeyCode::End => {
                self.select(usize::MAX);
                Action::None
            }
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('x') => self.toggle_selected(),
            KeyCode::Char('d') | KeyCode::Delete => self.remove_selected(),
            KeyCode::Tab | KeyCode::Esc | KeyCode::Char('i') | KeyCode::Char('a') => Action::Focus(Focus::Input),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!("{} Todos ({})", self.icons.title(), self.items.len()));

        if self.items.is_empty() {
            let empty = Paragraph::new(EMPTY_LIST_MESSAGE)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, rect);
            return;
        }

        let list_items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| self.render_item(index, item))
            .collect();

        let (highlight_symbol, highlight_style) = if self.focused {
            ("→ ", Style::default().bg(Color::DarkGray))
        } else {
            ("  ", Style::default())
        };
        let list = List::new(list_items)
            .block(block)
            .highlight_style(highlight_style)
            .highlight_symbol(highlight_symbol);

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}

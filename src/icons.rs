//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Todo status icons
#[derive(Debug, Clone)]
pub struct TodoStatusIcons {
    pub pending: &'static str,
    pub completed: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub title: &'static str,
    pub input: &'static str,
    pub help: &'static str,
    pub logs: &'static str,
    pub warning: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub todo_status: TodoStatusIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            todo_status: TodoStatusIcons {
                pending: "🔳",
                completed: "✅",
            },
            ui: UiIcons {
                title: "📝",
                input: "✏️",
                help: "💡",
                logs: "🔍",
                warning: "⚠️",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            todo_status: TodoStatusIcons {
                pending: "□",
                completed: "✓",
            },
            ui: UiIcons {
                title: "▶",
                input: "›",
                help: "ⓘ",
                logs: "≡",
                warning: "⚠",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            todo_status: TodoStatusIcons {
                pending: "[ ]",
                completed: "[X]",
            },
            ui: UiIcons {
                title: ">",
                input: ">",
                help: "?",
                logs: "#",
                warning: "!",
            },
        }
    }

    #[must_use]
    pub fn todo_pending(&self) -> &'static str {
        self.icons().todo_status.pending
    }

    #[must_use]
    pub fn todo_completed(&self) -> &'static str {
        self.icons().todo_status.completed
    }

    /// Status icon for an item with the given completed flag
    #[must_use]
    pub fn todo_status(&self, completed: bool) -> &'static str {
        if completed {
            self.todo_completed()
        } else {
            self.todo_pending()
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.icons().ui.title
    }

    #[must_use]
    pub fn input(&self) -> &'static str {
        self.icons().ui.input
    }

    #[must_use]
    pub fn help(&self) -> &'static str {
        self.icons().ui.help
    }

    #[must_use]
    pub fn logs(&self) -> &'static str {
        self.icons().ui.logs
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }
}

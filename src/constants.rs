//! Constants used throughout the application
//!
//! This module centralizes UI text, defaults and limits.

// Application identity
pub const APP_NAME: &str = "todolist";
pub const CONFIG_FILE_NAME: &str = "todolist.toml";
pub const LOG_FILE_NAME: &str = "todolist.log";

// UI defaults
pub const DEFAULT_TITLE: &str = "Todo List";
pub const DEFAULT_PLACEHOLDER: &str = "Add a new todo";
pub const EMPTY_LIST_MESSAGE: &str = "Nothing to do yet";

// Dialog titles
pub const DIALOG_TITLE_HELP: &str = "Help - Press 'Esc' or '?' to close";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";
pub const DIALOG_TITLE_REMOVE: &str = "Remove todo";

// Status bar hints
pub const HINTS_INPUT: &str = "Enter add | Tab list | Ctrl+C quit";
pub const HINTS_LIST: &str = "j/k move | Space toggle | d remove | Tab input | ? help | q quit";
pub const HINTS_LIST_NO_COMPLETION: &str = "j/k move | d remove | Tab input | ? help | q quit";

// Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";

// Limits
/// Number of log lines kept in memory for the logs dialog
pub const LOG_BUFFER_CAPACITY: usize = 1000;
/// Default event loop tick in milliseconds
pub const DEFAULT_TICK_RATE_MS: u64 = 50;
pub const MIN_TICK_RATE_MS: u64 = 10;
pub const MAX_TICK_RATE_MS: u64 = 1000;
/// Default format for item creation timestamps
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%H:%M";

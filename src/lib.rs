//! todolist - a terminal todo list
//!
//! This library provides an in-memory todo list store with change
//! notifications and a terminal interface built on top of it with Ratatui.
//!
//! # Modules
//!
//! * [`store`] - The todo list store, its items and change subscriptions
//! * [`config`] - Application configuration management
//! * [`logger`] - Logging setup and the in-memory log buffer
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup for the log view and optional log file
pub mod logger;

/// In-memory todo list store
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

pub use store::{StoreChange, TodoId, TodoItem, TodoListStore};

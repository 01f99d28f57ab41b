//! Core UI functionality for the todolist application.
//!
//! This module contains the building blocks every UI component relies on.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions, focus and dialog types
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling on the tokio runtime
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait and turn key events into [`Action`]s
//! 2. **Actions** are applied by the app component, which is the only writer of the todo store
//! 3. **Events** come from the [`EventHandler`], one per loop iteration

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};

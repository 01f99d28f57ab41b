//! In-memory todo list store.
//!
//! [`TodoListStore`] owns the ordered list of items and the pending input
//! string. It is the only place state changes happen: every successful
//! mutation is followed by exactly one [`StoreChange`] delivered to all
//! subscribers. Invalid calls (blank text, out-of-range index, unknown id)
//! are silent no-ops and notify nobody.

mod item;
mod observer;

pub use item::{TodoId, TodoItem};
pub use observer::{StoreChange, StoreView, SubscriptionId};

use log::{debug, trace};
use observer::Subscribers;
use std::fmt;
use tokio::sync::mpsc;

#[derive(Default)]
pub struct TodoListStore {
    items: Vec<TodoItem>,
    pending_input: String,
    subscribers: Subscribers,
}

impl fmt::Debug for TodoListStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoListStore")
            .field("items", &self.items)
            .field("pending_input", &self.pending_input)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl TodoListStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ---- mutations ----

    /// Append a new pending item and clear the pending input.
    ///
    /// Text is stored verbatim. Blank (empty or whitespace-only) text is
    /// ignored and leaves the pending input untouched.
    pub fn add_todo(&mut self, text: &str) -> Option<TodoId> {
        if text.trim().is_empty() {
            debug!("Ignoring add with blank text");
            return None;
        }

        let item = TodoItem::new(text);
        let id = item.id;
        self.items.push(item);
        self.pending_input.clear();

        let index = self.items.len() - 1;
        debug!("Added todo {id} at index {index}");
        self.notify(StoreChange::Added { id, index });
        Some(id)
    }

    /// Submit the pending input as a new item.
    pub fn submit_input(&mut self) -> Option<TodoId> {
        let text = self.pending_input.clone();
        self.add_todo(&text)
    }

    /// Replace the pending input verbatim.
    pub fn update_input(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.pending_input {
            return;
        }
        self.pending_input = text;
        trace!("Pending input is now {:?}", self.pending_input);
        self.notify(StoreChange::InputUpdated);
    }

    /// Flip the completed flag of the item at `index`.
    ///
    /// Returns `false` (and changes nothing) when `index` is out of range.
    pub fn toggle_todo(&mut self, index: usize) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            debug!("Ignoring toggle of out-of-range index {index}");
            return false;
        };

        let completed = item.toggle();
        let id = item.id;
        debug!("Toggled todo {id} at index {index} to completed={completed}");
        self.notify(StoreChange::Toggled { id, index, completed });
        true
    }

    /// Remove the item at `index`, shifting later items down by one.
    pub fn remove_todo(&mut self, index: usize) -> Option<TodoItem> {
        if index >= self.items.len() {
            debug!("Ignoring removal of out-of-range index {index}");
            return None;
        }

        let removed = self.items.remove(index);
        debug!("Removed todo {} from index {index}", removed.id);
        self.notify(StoreChange::Removed { id: removed.id, index });
        Some(removed)
    }

    /// Flip the completed flag of the item with the given id.
    pub fn toggle_by_id(&mut self, id: TodoId) -> bool {
        match self.position(id) {
            Some(index) => self.toggle_todo(index),
            None => {
                debug!("Ignoring toggle of unknown todo {id}");
                false
            }
        }
    }

    /// Remove the item with the given id.
    pub fn remove_by_id(&mut self, id: TodoId) -> Option<TodoItem> {
        match self.position(id) {
            Some(index) => self.remove_todo(index),
            None => {
                debug!("Ignoring removal of unknown todo {id}");
                None
            }
        }
    }

    // ---- reads ----

    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    #[must_use]
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    #[must_use]
    pub fn view(&self) -> StoreView<'_> {
        StoreView {
            items: &self.items,
            pending_input: &self.pending_input,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TodoItem> {
        self.items.get(index)
    }

    #[must_use]
    pub fn get_by_id(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Current position of the item with the given id.
    #[must_use]
    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    // ---- subscriptions ----

    /// Register an observer called after every successful mutation.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StoreChange, &StoreView<'_>) + 'static,
    {
        self.subscribers.add(Box::new(observer))
    }

    /// Register an observer that forwards changes into a channel.
    pub fn subscribe_channel(&mut self) -> (SubscriptionId, mpsc::UnboundedReceiver<StoreChange>) {
        let (observer, rx) = observer::channel_observer();
        (self.subscribers.add(observer), rx)
    }

    /// Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self, change: StoreChange) {
        let view = StoreView {
            items: &self.items,
            pending_input: &self.pending_input,
        };
        self.subscribers.notify(&change, &view);
    }
}

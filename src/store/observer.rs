//! Change notifications and subscriber bookkeeping for the todo store.

use super::item::{TodoId, TodoItem};
use tokio::sync::mpsc;

/// A successful mutation of the store.
///
/// Exactly one change is emitted per mutation, after it has been applied.
/// No-op calls emit nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    /// A new item was appended at `index` and the pending input was cleared
    Added { id: TodoId, index: usize },
    /// The item at `index` flipped to `completed`
    Toggled { id: TodoId, index: usize, completed: bool },
    /// The item formerly at `index` was removed; later items shifted down by one
    Removed { id: TodoId, index: usize },
    /// The pending input changed
    InputUpdated,
}

/// Read-only view of the store handed to observers and renderers.
#[derive(Debug, Clone, Copy)]
pub struct StoreView<'a> {
    pub items: &'a [TodoItem],
    pub pending_input: &'a str,
}

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub(crate) type Observer = Box<dyn FnMut(&StoreChange, &StoreView<'_>)>;

/// Registered observers, called in registration order.
#[derive(Default)]
pub(crate) struct Subscribers {
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl Subscribers {
    pub(crate) fn add(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }

    pub(crate) fn notify(&mut self, change: &StoreChange, view: &StoreView<'_>) {
        for (_, observer) in &mut self.observers {
            observer(change, view);
        }
    }
}

/// Build an observer that forwards every change into an unbounded channel.
///
/// A dropped receiver is ignored; the observer stays registered until
/// explicitly unsubscribed.
pub(crate) fn channel_observer() -> (Observer, mpsc::UnboundedReceiver<StoreChange>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let observer: Observer = Box::new(move |change: &StoreChange, _view: &StoreView<'_>| {
        let _ = tx.send(change.clone());
    });
    (observer, rx)
}

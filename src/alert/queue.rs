// SPDX-License-Identifier: MPL-2.0
//! Pending alerts waiting for the screen.
//!
//! Items are appended at the end and the next one to show is popped from the
//! end as well, so the most recently deferred alert comes back first. The
//! queue never holds two structurally equal alerts.

use super::identity::same_alert;
use super::request::AlertRequest;
use std::fmt;

/// Callback fired exactly once when a show or dismiss request has run its course.
pub type Completion = Box<dyn FnOnce()>;

/// Runs `first` then `then`, whichever of them exist.
#[must_use]
pub fn chain(first: Option<Completion>, then: Option<Completion>) -> Option<Completion> {
    match (first, then) {
        (Some(first), Some(then)) => Some(Box::new(move || {
            first();
            then();
        })),
        (first, None) => first,
        (None, then) => then,
    }
}

/// An alert waiting in the queue, with the options it should be shown with.
pub struct QueueItem {
    pub alert: AlertRequest,
    pub animated: bool,
    pub completion: Option<Completion>,
}

impl QueueItem {
    #[must_use]
    pub fn new(alert: AlertRequest, animated: bool) -> Self {
        Self {
            alert,
            animated,
            completion: None,
        }
    }

    #[must_use]
    pub fn with_completion(mut self, completion: impl FnOnce() + 'static) -> Self {
        self.completion = Some(Box::new(completion));
        self
    }

    /// Appends `then` after the item's own completion.
    pub fn chain_completion(&mut self, then: Option<Completion>) {
        self.completion = chain(self.completion.take(), then);
    }

    /// Drops the item, firing its completion if it has one.
    pub fn finish(self) {
        if let Some(completion) = self.completion {
            completion();
        }
    }
}

impl fmt::Debug for QueueItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueItem")
            .field("alert", &self.alert)
            .field("animated", &self.animated)
            .field("has_completion", &self.completion.is_some())
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct AlertQueue {
    items: Vec<QueueItem>,
}

impl AlertQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item` unless an equal alert is already queued.
    ///
    /// # Errors
    ///
    /// Hands the item back when it duplicates a queued alert.
    pub fn append(&mut self, item: QueueItem) -> Result<(), QueueItem> {
        if self.contains(&item.alert) {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the most recently appended item.
    pub fn pop_last(&mut self) -> Option<QueueItem> {
        self.items.pop()
    }

    /// Empties the queue, returning the removed items oldest first.
    pub fn remove_all(&mut self) -> Vec<QueueItem> {
        std::mem::take(&mut self.items)
    }

    #[must_use]
    pub fn contains(&self, alert: &AlertRequest) -> bool {
        self.items.iter().any(|item| same_alert(&item.alert, alert))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item [`pop_last`](Self::pop_last) would return.
    #[must_use]
    pub fn last(&self) -> Option<&QueueItem> {
        self.items.last()
    }

    /// Queued items, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &QueueItem> {
        self.items.iter()
    }
}

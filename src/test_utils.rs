// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests.

use std::cell::Cell;
use std::rc::Rc;

/// Counts how many times the callbacks it hands out were invoked.
#[derive(Debug, Clone, Default)]
pub struct CompletionProbe {
    hits: Rc<Cell<usize>>,
}

impl CompletionProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn callback(&self) -> impl FnOnce() + 'static {
        let hits = Rc::clone(&self.hits);
        move || hits.set(hits.get() + 1)
    }

    pub fn count(&self) -> usize {
        self.hits.get()
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suggestion list state: items, the active index, open/closed.
//!
//! # Invariants
//!
//! - `active` is `None` or a valid index into `items`.
//! - `open` implies `items` is non-empty.
//!
//! Both are re-established by every method that touches `items`.

use crate::types::Candidate;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionList {
    items: Vec<Candidate>,
    active: Option<usize>,
    open: bool,
}

impl SuggestionList {
    pub fn items(&self) -> &[Candidate] {
        &self.items
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Install a fresh ranked batch. Opens on a non-empty batch with nothing
    /// active; an empty batch resets.
    pub fn replace(&mut self, items: Vec<Candidate>) {
        if items.is_empty() {
            self.reset();
            return;
        }
        self.items = items;
        self.active = None;
        self.open = true;
    }

    /// Empty, nothing active, closed.
    pub fn reset(&mut self) {
        self.items.clear();
        self.active = None;
        self.open = false;
    }

    /// ArrowDown: first item from none, wraps from last to first.
    pub fn move_next(&mut self) -> bool {
        if !self.open {
            return false;
        }
        let n = self.items.len();
        self.active = Some(match self.active {
            None => 0,
            Some(i) => (i + 1) % n,
        });
        true
    }

    /// ArrowUp: last item from none, wraps from first to last.
    pub fn move_prev(&mut self) -> bool {
        if !self.open {
            return false;
        }
        let n = self.items.len();
        self.active = Some(match self.active {
            None | Some(0) => n - 1,
            Some(i) => i - 1,
        });
        true
    }

    /// Highlight an item directly. Out-of-range indices are ignored.
    pub fn set_active(&mut self, index: usize) -> bool {
        if !self.open || index >= self.items.len() {
            return false;
        }
        self.active = Some(index);
        true
    }
}

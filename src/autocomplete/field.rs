// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The host input a controller is attached to.

use crate::types::{BoundSelection, StableId};
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared handle to an input's visible text and its out-of-band identifier.
///
/// Clones share the same field. Only a controller commit can set the
/// identifier; every other write goes through [`HostField::set_text`] and
/// clears it.
#[derive(Debug, Clone, Default)]
pub struct HostField {
    inner: Arc<Mutex<BoundSelection>>,
}

impl HostField {
    pub fn new() -> Self {
        Self::default()
    }

    /// A field pre-filled with free text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(BoundSelection::typed(text))),
        }
    }

    pub fn text(&self) -> String {
        self.inner.lock().display_value.clone()
    }

    pub fn stable_id(&self) -> Option<StableId> {
        self.inner.lock().stable_id.clone()
    }

    /// Text and identifier read together.
    pub fn selection(&self) -> BoundSelection {
        self.inner.lock().clone()
    }

    /// A manual edit: replaces the text and drops any bound identifier.
    pub fn set_text(&self, text: impl Into<String>) {
        let mut guard = self.inner.lock();
        guard.display_value = text.into();
        guard.stable_id = None;
    }

    /// Forget the identifier but keep the text.
    pub fn clear_binding(&self) {
        self.inner.lock().stable_id = None;
    }

    pub(crate) fn bind(&self, display_value: &str, stable_id: StableId) {
        *self.inner.lock() = BoundSelection {
            display_value: display_value.to_string(),
            stable_id: Some(stable_id),
        };
    }
}

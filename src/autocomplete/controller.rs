// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The per-field controller.
//!
//! ```text
//!              input/focus (len >= min), debounced, >= 1 ranked item
//!   ┌────────┐ ─────────────────────────────────────────────────────▶ ┌──────────────┐
//!   │ Closed │                                                        │ Open(items,  │
//!   └────────┘ ◀───────────────────────────────────────────────────── │      active) │
//!              short input, 0 items, Escape, blur + grace, commit,    └──────────────┘
//!              dispatch failure                                         ▲ Arrow/PointerMove
//!                                                                       └─ moves active
//! ```
//!
//! # Invariants
//!
//! - **Newest query wins**: every lookup takes a sequence number when it
//!   fires; a resolution whose number is no longer the latest is dropped.
//!   Dismissal also advances the sequence, so a fetch in flight cannot
//!   reopen a list the user closed.
//! - **Atomic binding**: a commit writes text and identifier together.
//! - **Containment**: a failing fetch closes this list and logs; nothing
//!   propagates to other fields.
//!
//! Locks are never held across an await.

use super::event::{EventOutcome, FieldEvent, Key};
use super::field::HostField;
use super::state::SuggestionList;
use crate::debounce::Debouncer;
use crate::error::DispatchError;
use crate::scoring::ranking::rank;
use crate::types::Candidate;
use crate::utils::trimmed_len;
use futures::future::BoxFuture;
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Candidate source: trimmed query text in, unranked candidates out.
pub type FetchFn =
    Arc<dyn Fn(String) -> BoxFuture<'static, Result<Vec<Candidate>, DispatchError>> + Send + Sync>;

/// Markup for one suggestion.
pub type RenderFn = Arc<dyn Fn(&Candidate) -> String + Send + Sync>;

/// Observer for committed selections.
pub type CommitHook = Arc<dyn Fn(&Candidate) + Send + Sync>;

/// One rendered suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderItem {
    pub markup: String,
    pub active: bool,
}

/// What the surface should show for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderList {
    pub open: bool,
    pub items: Vec<RenderItem>,
}

pub(super) struct Parts {
    pub field_id: String,
    pub field: HostField,
    pub min_chars: usize,
    pub debounce: Duration,
    pub blur_grace: Duration,
    pub display_limit: usize,
    pub fetch: FetchFn,
    pub render: RenderFn,
    pub on_commit: Option<CommitHook>,
}

struct Shared {
    list: SuggestionList,
    latest: u64,
}

struct Inner {
    field_id: String,
    field: HostField,
    min_chars: usize,
    blur_grace: Duration,
    display_limit: usize,
    fetch: FetchFn,
    render: RenderFn,
    on_commit: Option<CommitHook>,
    shared: Mutex<Shared>,
    debouncer: Debouncer,
    blur_timer: Mutex<Option<JoinHandle<()>>>,
    render_tx: watch::Sender<RenderList>,
}

/// Autocomplete controller for one host field. Cheap to clone; clones drive
/// the same controller.
#[derive(Clone)]
pub struct Autocomplete {
    inner: Arc<Inner>,
}

impl Autocomplete {
    pub(super) fn from_parts(parts: Parts) -> Self {
        let (render_tx, _) = watch::channel(RenderList::default());
        Self {
            inner: Arc::new(Inner {
                field_id: parts.field_id,
                field: parts.field,
                min_chars: parts.min_chars,
                blur_grace: parts.blur_grace,
                display_limit: parts.display_limit,
                fetch: parts.fetch,
                render: parts.render,
                on_commit: parts.on_commit,
                shared: Mutex::new(Shared {
                    list: SuggestionList::default(),
                    latest: 0,
                }),
                debouncer: Debouncer::new(parts.debounce),
                blur_timer: Mutex::new(None),
                render_tx,
            }),
        }
    }

    pub fn field_id(&self) -> &str {
        &self.inner.field_id
    }

    pub fn field(&self) -> &HostField {
        &self.inner.field
    }

    /// Snapshot of the current list state.
    pub fn state(&self) -> SuggestionList {
        self.inner.shared.lock().list.clone()
    }

    /// The render list as last published.
    pub fn render_list(&self) -> RenderList {
        self.inner.render_tx.borrow().clone()
    }

    /// Receive every render list this controller publishes.
    pub fn subscribe(&self) -> watch::Receiver<RenderList> {
        self.inner.render_tx.subscribe()
    }

    /// Feed one event. Must run inside a tokio runtime.
    pub fn handle(&self, event: FieldEvent) -> EventOutcome {
        let inner = &self.inner;
        match event {
            FieldEvent::Input(text) => {
                inner.cancel_blur();
                inner.field.set_text(text);
                inner.text_changed(false);
                EventOutcome::Handled
            }
            FieldEvent::Focus => {
                inner.cancel_blur();
                inner.text_changed(true);
                EventOutcome::Handled
            }
            FieldEvent::Blur => {
                inner.arm_blur(Arc::downgrade(inner));
                EventOutcome::Handled
            }
            FieldEvent::Key(key) => inner.key(key),
            FieldEvent::PointerDown(index) => {
                if inner.commit(index) {
                    EventOutcome::Handled
                } else {
                    EventOutcome::Ignored
                }
            }
            FieldEvent::PointerMove(index) => {
                let changed = inner.shared.lock().list.set_active(index);
                if changed {
                    inner.publish();
                    EventOutcome::Handled
                } else {
                    EventOutcome::Ignored
                }
            }
        }
    }

    /// Close the list and drop pending work, as Escape does.
    pub fn dismiss(&self) {
        self.inner.dismiss();
    }
}

impl Inner {
    fn text_changed(self: &Arc<Self>, on_focus: bool) {
        let text = self.field.text();
        if trimmed_len(&text) < self.min_chars {
            if on_focus {
                self.field.clear_binding();
            }
            self.dismiss();
            return;
        }
        let weak = Arc::downgrade(self);
        self.debouncer.call(move || async move {
            if let Some(inner) = weak.upgrade() {
                inner.lookup().await;
            }
        });
    }

    /// The debounced pipeline: re-read the field, fetch, rank, publish.
    async fn lookup(&self) {
        let text = self.field.text();
        let term = text.trim().to_string();
        if trimmed_len(&term) < self.min_chars {
            // Shortened behind the controller's back since the keystroke.
            self.dismiss();
            return;
        }

        let seq = {
            let mut shared = self.shared.lock();
            shared.latest += 1;
            shared.latest
        };
        tracing::debug!(field = %self.field_id, seq, term = %term, "lookup");

        let result = (self.fetch)(term.clone()).await;

        {
            let mut shared = self.shared.lock();
            if shared.latest != seq {
                tracing::debug!(
                    field = %self.field_id,
                    seq,
                    latest = shared.latest,
                    "discarding stale suggestions"
                );
                return;
            }
            match result {
                Ok(candidates) => {
                    let ranked = rank(&candidates, &term, self.display_limit);
                    tracing::debug!(
                        field = %self.field_id,
                        seq,
                        fetched = candidates.len(),
                        shown = ranked.len(),
                        "suggestions ready"
                    );
                    shared.list.replace(ranked);
                }
                Err(err) => {
                    tracing::error!(field = %self.field_id, error = %err, "suggestion lookup failed");
                    shared.list.reset();
                }
            }
        }
        self.publish();
    }

    fn key(&self, key: Key) -> EventOutcome {
        let outcome = match key {
            Key::ArrowDown => self.shared.lock().list.move_next(),
            Key::ArrowUp => self.shared.lock().list.move_prev(),
            Key::Enter => {
                let active = self.shared.lock().list.active();
                return match active {
                    Some(index) if self.commit(index) => EventOutcome::Handled,
                    _ => EventOutcome::Ignored,
                };
            }
            Key::Escape => {
                let was_open = self.shared.lock().list.is_open();
                self.dismiss();
                return if was_open {
                    EventOutcome::Handled
                } else {
                    EventOutcome::Ignored
                };
            }
            Key::Other => false,
        };
        if outcome {
            self.publish();
            EventOutcome::Handled
        } else {
            EventOutcome::Ignored
        }
    }

    /// Bind item `index` onto the field and close. False if the list is
    /// closed or the index is out of range.
    fn commit(&self, index: usize) -> bool {
        let chosen = {
            let mut shared = self.shared.lock();
            if !shared.list.is_open() {
                return false;
            }
            let Some(candidate) = shared.list.items().get(index).cloned() else {
                return false;
            };
            self.field
                .bind(&candidate.display_text, candidate.stable_id.clone());
            shared.latest += 1;
            shared.list.reset();
            candidate
        };
        self.debouncer.cancel();
        self.cancel_blur();
        self.publish();

        tracing::debug!(
            field = %self.field_id,
            id = %chosen.stable_id,
            text = %chosen.display_text,
            "selection bound"
        );
        if let Some(hook) = &self.on_commit {
            hook(&chosen);
        }
        true
    }

    fn dismiss(&self) {
        self.debouncer.cancel();
        {
            let mut shared = self.shared.lock();
            shared.latest += 1;
            shared.list.reset();
        }
        self.publish();
    }

    fn arm_blur(&self, weak: Weak<Inner>) {
        let grace = self.blur_grace;
        let timer = tokio::spawn(async move {
            tokio::time::sleep(grace).await;
            if let Some(inner) = weak.upgrade() {
                inner.dismiss();
            }
        });
        if let Some(previous) = self.blur_timer.lock().replace(timer) {
            previous.abort();
        }
    }

    fn cancel_blur(&self) {
        if let Some(timer) = self.blur_timer.lock().take() {
            timer.abort();
        }
    }

    fn publish(&self) {
        let list = {
            let shared = self.shared.lock();
            let active = shared.list.active();
            RenderList {
                open: shared.list.is_open(),
                items: shared
                    .list
                    .items()
                    .iter()
                    .enumerate()
                    .map(|(i, c)| RenderItem {
                        markup: (self.render)(c),
                        active: active == Some(i),
                    })
                    .collect(),
            }
        };
        self.render_tx.send_if_modified(|current| {
            if *current == list {
                false
            } else {
                *current = list;
                true
            }
        });
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(timer) = self.blur_timer.get_mut().take() {
            timer.abort();
        }
    }
}

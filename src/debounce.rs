// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Trailing-edge debouncer for async producers.
//!
//! Each `call` replaces the pending timer. When a timer survives its full wait
//! the producer is handed to its own task, so cancelling or re-arming the
//! debouncer afterwards never interrupts work that has already started.
//!
//! # Invariants
//!
//! - At most one timer is pending at any time.
//! - Among calls less than `wait` apart, only the last one's producer runs,
//!   and it runs `wait` after that last call.
//! - A producer's failure (or panic) stays inside its task.
//!
//! `call` and `cancel` must run inside a tokio runtime.

use parking_lot::Mutex;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

pub struct Debouncer {
    wait: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `producer` to run after the quiet period, replacing any
    /// pending call.
    pub fn call<F, Fut>(&self, producer: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let wait = self.wait;
        let timer = tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            // Detached: aborting the timer from here on is a no-op.
            tokio::spawn(producer());
        });

        let mut pending = self.pending.lock();
        if let Some(previous) = pending.replace(timer) {
            previous.abort();
            tracing::debug!(wait_ms = wait.as_millis() as u64, "debounce timer reset");
        }
    }

    /// Drop the pending call, if any. Producers already running are untouched.
    pub fn cancel(&self) {
        if let Some(previous) = self.pending.lock().take() {
            previous.abort();
        }
    }

    /// Whether a timer is armed and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}

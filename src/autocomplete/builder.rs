// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Builder for [`Autocomplete`] controllers.

use super::controller::{Autocomplete, CommitHook, FetchFn, Parts, RenderFn};
use super::field::HostField;
use crate::config::AutocompleteSettings;
use crate::error::{CostarError, DispatchError, Result};
use crate::types::Candidate;
use crate::utils::escape_html;
use futures::FutureExt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Configures one controller. Defaults come from [`AutocompleteSettings`].
pub struct AutocompleteBuilder {
    field_id: String,
    field: HostField,
    min_chars: usize,
    debounce: Duration,
    blur_grace: Duration,
    display_limit: usize,
    fetch: Option<FetchFn>,
    render: RenderFn,
    on_commit: Option<CommitHook>,
}

impl AutocompleteBuilder {
    pub fn new(field_id: impl Into<String>, field: HostField) -> Self {
        let defaults = AutocompleteSettings::default();
        Self {
            field_id: field_id.into(),
            field,
            min_chars: defaults.min_chars,
            debounce: defaults.debounce(),
            blur_grace: defaults.blur_grace(),
            display_limit: defaults.display_limit,
            fetch: None,
            render: Arc::new(|c: &Candidate| escape_html(&c.display_text)),
            on_commit: None,
        }
    }

    /// Take timings and limits from a loaded config.
    pub fn settings(mut self, settings: &AutocompleteSettings) -> Self {
        self.min_chars = settings.min_chars;
        self.debounce = settings.debounce();
        self.blur_grace = settings.blur_grace();
        self.display_limit = settings.display_limit;
        self
    }

    pub fn min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    pub fn debounce(mut self, wait: Duration) -> Self {
        self.debounce = wait;
        self
    }

    pub fn blur_grace(mut self, grace: Duration) -> Self {
        self.blur_grace = grace;
        self
    }

    pub fn display_limit(mut self, limit: usize) -> Self {
        self.display_limit = limit;
        self
    }

    /// Candidate source, called with the trimmed query text.
    pub fn fetch<F, Fut>(mut self, fetch: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<Vec<Candidate>, DispatchError>> + Send + 'static,
    {
        self.fetch = Some(Arc::new(move |term: String| fetch(term).boxed()));
        self
    }

    /// Pre-built candidate source, as returned by the `suggest` helpers.
    pub fn fetch_fn(mut self, fetch: FetchFn) -> Self {
        self.fetch = Some(fetch);
        self
    }

    /// Markup for one suggestion. Defaults to the escaped display text.
    pub fn render(mut self, render: impl Fn(&Candidate) -> String + Send + Sync + 'static) -> Self {
        self.render = Arc::new(render);
        self
    }

    /// Called after a candidate is bound onto the field.
    pub fn on_commit(mut self, hook: impl Fn(&Candidate) + Send + Sync + 'static) -> Self {
        self.on_commit = Some(Arc::new(hook));
        self
    }

    pub fn build(self) -> Result<Autocomplete> {
        let fetch = self.fetch.ok_or_else(|| {
            CostarError::Config(format!("{}: no candidate source configured", self.field_id))
        })?;
        if self.min_chars == 0 || self.display_limit == 0 {
            return Err(CostarError::Config(format!(
                "{}: min_chars and display_limit must be at least 1",
                self.field_id
            )));
        }
        Ok(Autocomplete::from_parts(Parts {
            field_id: self.field_id,
            field: self.field,
            min_chars: self.min_chars,
            debounce: self.debounce,
            blur_grace: self.blur_grace,
            display_limit: self.display_limit,
            fetch,
            render: self.render,
            on_commit: self.on_commit,
        }))
    }
}

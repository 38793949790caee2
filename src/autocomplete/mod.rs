// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Autocomplete: one controller per input field.
//!
//! A controller turns field events into debounced lookups, ranks what the
//! store returns, publishes a [`RenderList`], and on selection binds the
//! chosen candidate's identifier onto its [`HostField`]. The same type backs
//! every field; only the builder's fetch and render functions differ.

mod builder;
mod controller;
mod event;
mod field;
mod state;

pub use builder::AutocompleteBuilder;
pub use controller::{Autocomplete, CommitHook, FetchFn, RenderFn, RenderItem, RenderList};
pub use event::{EventOutcome, FieldEvent, Key};
pub use field::HostField;
pub use state::SuggestionList;

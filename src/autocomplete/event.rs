// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

/// Keys the controller reacts to. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

/// Something that happened to the host field or its list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The user edited the text; carries the new value.
    Input(String),
    Focus,
    Blur,
    Key(Key),
    /// Mouse/touch down on the i-th rendered item.
    PointerDown(usize),
    /// Pointer moved over the i-th rendered item.
    PointerMove(usize),
}

/// Whether the controller consumed the event.
///
/// A handled Enter means the surrounding form must not submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Handled,
    Ignored,
}

impl EventOutcome {
    pub fn is_handled(self) -> bool {
        self == EventOutcome::Handled
    }
}

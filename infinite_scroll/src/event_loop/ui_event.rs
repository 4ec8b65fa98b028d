// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ScrollMetrics;

/// Raw input from whatever front end drives the [`crate::run_event_loop()`]. Nothing
/// here is rate limited yet, the loop does that.
#[derive(Debug, Clone, PartialEq, Eq, strum_macros::AsRefStr)]
pub enum UiEvent {
    /// The list was scrolled. Passes through the scroll throttle.
    Scroll(ScrollMetrics),
    /// The full current value of the search input (not a delta). Passes through the
    /// search debounce.
    SearchInput(String),
    Shutdown,
}

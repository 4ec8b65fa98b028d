// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A snapshot of the scroll position of the list container, in whatever unit the view
/// measures in (rows for a terminal, pixels for a browser).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
    /// Offset of the top of the viewport from the top of the content.
    pub scroll_top: u64,
    /// Height of the viewport.
    pub client_height: u64,
    /// Height of all the rendered content.
    pub scroll_height: u64,
}

impl ScrollMetrics {
    /// The viewport is scrolled as far down as the content allows.
    #[must_use]
    pub fn scrolled_to_bottom(scroll_height: u64, client_height: u64) -> Self {
        Self {
            scroll_top: scroll_height.saturating_sub(client_height),
            client_height,
            scroll_height,
        }
    }

    /// True when the bottom of the viewport is within `distance` of the bottom of the
    /// content.
    #[must_use]
    pub fn is_near_bottom(&self, distance: u64) -> bool {
        self.scroll_top.saturating_add(self.client_height)
            >= self.scroll_height.saturating_sub(distance)
    }
}

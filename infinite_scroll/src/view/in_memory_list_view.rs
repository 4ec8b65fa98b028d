// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ListView, Record, ScrollMetrics, format_status};

/// Keeps everything "rendered" in memory. Used by headless sessions and tests, where
/// each record is one row of `row_height` units in a viewport `viewport_height` units
/// tall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryListView {
    pub records: Vec<Record>,
    pub status: String,
    pub is_loader_visible: bool,
    pub search_input: String,
    /// How many times [`ListView::clear`] was called.
    pub clear_count: usize,
    pub row_height: u64,
    pub viewport_height: u64,
}

impl Default for InMemoryListView {
    fn default() -> Self { Self::new(1, 40) }
}

impl InMemoryListView {
    #[must_use]
    pub fn new(row_height: u64, viewport_height: u64) -> Self {
        Self {
            records: vec![],
            status: format_status(0),
            is_loader_visible: false,
            search_input: String::new(),
            clear_count: 0,
            row_height,
            viewport_height,
        }
    }

    #[must_use]
    pub fn ids(&self) -> Vec<u64> { self.records.iter().map(|it| it.id).collect() }

    #[must_use]
    pub fn content_height(&self) -> u64 {
        u64::try_from(self.records.len())
            .unwrap_or(u64::MAX)
            .saturating_mul(self.row_height)
    }

    /// Scroll metrics with the viewport scrolled to the very bottom of the content.
    #[must_use]
    pub fn scroll_metrics_at_bottom(&self) -> ScrollMetrics {
        ScrollMetrics::scrolled_to_bottom(self.content_height(), self.viewport_height)
    }

    /// Scroll metrics with the viewport at the very top of the content.
    #[must_use]
    pub fn scroll_metrics_at_top(&self) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top: 0,
            client_height: self.viewport_height,
            scroll_height: self.content_height(),
        }
    }
}

impl ListView for InMemoryListView {
    fn append(&mut self, records: Vec<Record>) { self.records.extend(records); }

    fn clear(&mut self) {
        self.records.clear();
        self.clear_count += 1;
    }

    fn set_status(&mut self, total_items_loaded: u64) {
        self.status = format_status(total_items_loaded);
    }

    fn show_loader(&mut self) { self.is_loader_visible = true; }

    fn hide_loader(&mut self) { self.is_loader_visible = false; }

    fn echo_search_input(&mut self, text: &str) { text.clone_into(&mut self.search_input); }
}

// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Generation, LoadRequest};

/// Bookkeeping for one search session. Owned by exactly one [`crate::Controller`] and
/// only mutated through the methods below.
///
/// At most one request for the current [`Generation`] is outstanding at any time:
/// [`Self::begin_request()`] is only called when `is_loading` is false, and it sets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// 1-based page number of the next request. Incremented when a request is issued,
    /// not when its response arrives.
    pub current_page: u64,
    pub page_size: u64,
    /// True from the moment a request is issued until its response (or error) arrives.
    pub is_loading: bool,
    /// Running count of records rendered since the last reset.
    pub total_items_loaded: u64,
    /// Empty means no filter.
    pub search_term: String,
    pub generation: Generation,
}

impl SessionState {
    #[must_use]
    pub fn new(page_size: u64) -> Self {
        Self {
            current_page: 1,
            page_size,
            is_loading: false,
            total_items_loaded: 0,
            search_term: String::new(),
            generation: Generation::default(),
        }
    }

    /// Marks a request as outstanding and returns it. The page counter moves on
    /// immediately, so the next request asks for the following page.
    pub fn begin_request(&mut self) -> LoadRequest {
        self.is_loading = true;
        let request = LoadRequest {
            page: self.current_page,
            page_size: self.page_size,
            search_term: self.search_term.clone(),
            generation: self.generation,
        };
        self.current_page = self.current_page.saturating_add(1);
        request
    }

    /// Undoes [`Self::begin_request()`] when the request never reached the fetcher.
    pub fn abort_request(&mut self, request: &LoadRequest) {
        self.is_loading = false;
        self.current_page = request.page;
    }

    /// A response for the current generation arrived with `count` records (which may
    /// be zero).
    pub fn complete_request(&mut self, count: u64) {
        self.total_items_loaded = self.total_items_loaded.saturating_add(count);
        self.is_loading = false;
    }

    /// An error for the current generation arrived, or the fetcher went away.
    pub fn fail_request(&mut self) { self.is_loading = false; }

    /// Starts a new search session. Any request that is still in flight belongs to the
    /// previous generation, so `is_loading` is cleared unconditionally.
    pub fn reset(&mut self, new_term: String) {
        self.search_term = new_term;
        self.generation = self.generation.next();
        self.current_page = 1;
        self.total_items_loaded = 0;
        self.is_loading = false;
    }

    #[must_use]
    pub fn is_current(&self, generation: Generation) -> bool {
        self.generation == generation
    }
}

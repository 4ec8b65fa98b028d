// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Record, digit_projection};

/// Simulates server side filtering of a fetched page.
///
/// An empty `search_term` passes `records` through untouched. Otherwise a record is
/// kept when either:
/// 1. its title contains the term, ignoring case, or
/// 2. the digits of the title contain the digits of the term. So `"#45"` matches
///    `"Item #450"`, and so does `"id 45"`. A term without digits has an empty digit
///    projection, which every title contains, so such a term keeps the whole page.
///
/// Order is preserved, and filtering is idempotent.
#[must_use]
pub fn apply_filter(records: Vec<Record>, search_term: &str) -> Vec<Record> {
    if search_term.is_empty() {
        return records;
    }
    let matcher = SearchMatcher::new(search_term);
    records
        .into_iter()
        .filter(|record| matcher.is_match(&record.title))
        .collect()
}

/// The lowercased term and its digit projection, computed once per page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatcher {
    term_lowercase: String,
    term_digits: String,
}

impl SearchMatcher {
    #[must_use]
    pub fn new(search_term: &str) -> Self {
        Self {
            term_lowercase: search_term.to_lowercase(),
            term_digits: digit_projection(search_term),
        }
    }

    #[must_use]
    pub fn is_match(&self, title: &str) -> bool {
        if title.to_lowercase().contains(&self.term_lowercase) {
            return true;
        }
        digit_projection(title).contains(&self.term_digits)
    }
}

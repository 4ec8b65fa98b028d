// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Page jump heuristic. A search term that carries digits is treated as a direct record
//! id lookup, so the first page of that search is fetched from the page that would
//! contain the id, instead of scanning forward from page 1. This is a shortcut, not an
//! index: it only engages on the first page of a new search, and subsequent pages of
//! the same search continue from the controller's own page counter.

/// Keeps only the ASCII digits of `text`, in order. `"Item #450"` becomes `"450"`.
#[must_use]
pub fn digit_projection(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Parses the digit projection of `search_term`. Returns [`None`] if it has no digits.
/// Numbers too large for a [`u64`] saturate to [`u64::MAX`], which resolves to a page
/// past the end of any dataset (an empty page, not an error).
#[must_use]
pub fn parse_search_number(search_term: &str) -> Option<u64> {
    let digits = digit_projection(search_term);
    if digits.is_empty() {
        return None;
    }
    // The only way an all digit string fails to parse is overflow.
    Some(digits.parse::<u64>().unwrap_or(u64::MAX))
}

/// Resolves the page the fetcher actually retrieves.
///
/// - `requested_page == 1` and `search_term` contains a digit: `floor(n / page_size) +
///   1`, where `n` is the number made of the term's digits.
/// - Anything else: `requested_page`, unchanged.
///
/// A zero `page_size` never jumps (requests with one are rejected before this is
/// called).
#[must_use]
pub fn resolve_target_page(requested_page: u64, page_size: u64, search_term: &str) -> u64 {
    if requested_page != 1 {
        return requested_page;
    }
    let Some(number) = parse_search_number(search_term) else {
        return requested_page;
    };
    number
        .checked_div(page_size)
        .map_or(requested_page, |it| it.saturating_add(1))
}

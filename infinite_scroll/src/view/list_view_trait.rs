// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Record;

/// The UI surface the [`crate::Controller`] renders into: a scrollable list that only
/// ever grows (until a new search clears it), a status region with the running total,
/// and a loading indicator that is visible while a request is outstanding.
///
/// Rendering is a side effect on the UI, so none of these methods fail. Implementations
/// that write to a device log write errors instead of surfacing them.
pub trait ListView {
    /// Appends `records` after everything already rendered, in the given order. The
    /// view owns them from here on.
    fn append(&mut self, records: Vec<Record>);

    /// Removes every rendered record.
    fn clear(&mut self);

    fn set_status(&mut self, total_items_loaded: u64);

    fn show_loader(&mut self);

    fn hide_loader(&mut self);

    /// Echo of the raw search input while it is still being typed, before the debounce
    /// releases it. Views without an input region ignore it.
    fn echo_search_input(&mut self, _text: &str) {}
}

/// Status region text. `"Items: 50"`.
#[must_use]
pub fn format_status(total_items_loaded: u64) -> String {
    format!("Items: {total_items_loaded}")
}

/// One rendered list entry.
/// `"Item #7 | ID: 7 | Processed: K3J9Q0ZP1XA | Date: 2026-10-09T12:31:07.123Z"`.
#[must_use]
pub fn format_record_line(record: &Record) -> String {
    format!(
        "{} | ID: {} | Processed: {} | Date: {}",
        record.title,
        record.id,
        record.processed_value,
        record
            .timestamp
            .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    )
}

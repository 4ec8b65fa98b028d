// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Timestamps are spread over this many milliseconds before "now" (about 11.5 days).
pub const TIMESTAMP_WINDOW_MS: i64 = 1_000_000_000;

/// Length of the [`Record::processed_value`] token.
pub const PROCESSED_VALUE_LEN: usize = 11;

const BASE36_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// One row of the dataset. Created by the fetcher for a single response, never
/// mutated, and handed over to the [`crate::ListView`] that renders it.
///
/// On the wire the keys are camelCase and the timestamp is an ISO-8601 string:
///
/// ```json
/// {"id":7,"title":"Item #7","processedValue":"K3J9Q0ZP1XA","timestamp":"2026-10-09T12:31:07.123Z"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: u64,
    pub title: String,
    /// Opaque derived token. Its value carries no meaning.
    pub processed_value: String,
    pub timestamp: DateTime<Utc>,
}

impl Record {
    /// Generates the record for `id`. The title is derived from the id, the processed
    /// value and the timestamp (somewhere in the [`TIMESTAMP_WINDOW_MS`] before `now`)
    /// come from `rng`.
    pub fn generate(id: u64, now: DateTime<Utc>, rng: &mut impl Rng) -> Self {
        let age = TimeDelta::milliseconds(rng.random_range(0..TIMESTAMP_WINDOW_MS));
        Self {
            id,
            title: title_for_id(id),
            processed_value: generate_processed_value(rng),
            timestamp: now - age,
        }
    }
}

#[must_use]
pub fn title_for_id(id: u64) -> String { format!("Item #{id}") }

pub fn generate_processed_value(rng: &mut impl Rng) -> String {
    (0..PROCESSED_VALUE_LEN)
        .map(|_| char::from(BASE36_DIGITS[rng.random_range(0..BASE36_DIGITS.len())]))
        .collect()
}

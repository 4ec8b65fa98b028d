// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{future::Future, ops::Range, time::Duration};

use chrono::Utc;

use crate::{DataSource, FetchError, PagerConfig, Record};

/// Mocks a paged REST endpoint over a dataset of `dataset_bound` records. Every call
/// waits `simulated_latency` (a stand-in for the network round trip) and then generates
/// the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockDataSource {
    pub dataset_bound: u64,
    pub simulated_latency: Duration,
}

impl MockDataSource {
    #[must_use]
    pub fn new(dataset_bound: u64, simulated_latency: Duration) -> Self {
        Self {
            dataset_bound,
            simulated_latency,
        }
    }
}

impl From<&PagerConfig> for MockDataSource {
    fn from(config: &PagerConfig) -> Self {
        Self::new(config.dataset_bound, config.simulated_latency)
    }
}

impl DataSource for MockDataSource {
    fn fetch_page(
        &self,
        page: u64,
        page_size: u64,
    ) -> impl Future<Output = Result<Vec<Record>, FetchError>> + Send {
        let dataset_bound = self.dataset_bound;
        let simulated_latency = self.simulated_latency;
        async move {
            tokio::time::sleep(simulated_latency).await;
            let records = generate_page(page, page_size, dataset_bound);
            tracing::trace!(
                message = "🗃️ mock page generated",
                page,
                page_size,
                count = records.len()
            );
            Ok(records)
        }
    }
}

/// Ids on the 1-based `page`: `(page - 1) * page_size` upward, at most `page_size` of
/// them, never reaching `dataset_bound`. Pages past the bound (including ones whose
/// start id does not fit in a [`u64`]) give an empty range.
#[must_use]
pub fn page_id_range(page: u64, page_size: u64, dataset_bound: u64) -> Range<u64> {
    let Some(start) = page.saturating_sub(1).checked_mul(page_size) else {
        return 0..0;
    };
    if start >= dataset_bound {
        return 0..0;
    }
    start..start.saturating_add(page_size).min(dataset_bound)
}

/// No `.await` happens while the [`rand::rngs::ThreadRng`] is alive, which keeps the
/// [`DataSource::fetch_page`] future [`Send`].
#[must_use]
pub fn generate_page(page: u64, page_size: u64, dataset_bound: u64) -> Vec<Record> {
    let now = Utc::now();
    let mut rng = rand::rng();
    page_id_range(page, page_size, dataset_bound)
        .map(|id| Record::generate(id, now, &mut rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(1, 50, 10_000, 0..50 ; "first page")]
    #[test_case(10, 50, 10_000, 450..500 ; "tenth page")]
    #[test_case(200, 50, 10_000, 9_950..10_000 ; "last full page")]
    #[test_case(201, 50, 10_000, 0..0 ; "one past the end")]
    #[test_case(3, 40, 100, 80..100 ; "partial last page")]
    #[test_case(u64::MAX, 50, 10_000, 0..0 ; "start id overflows")]
    fn test_page_id_range(page: u64, page_size: u64, bound: u64, expected: Range<u64>) {
        assert_eq!(page_id_range(page, page_size, bound), expected);
    }

    #[test]
    fn test_generate_page_never_reaches_bound() {
        let records = generate_page(3, 40, 100);
        assert_eq!(records.len(), 20);
        assert!(records.iter().all(|it| it.id < 100));
        assert_eq!(records.first().map(|it| it.id), Some(80));
        assert_eq!(records.last().map(|it| it.id), Some(99));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_page_waits_for_simulated_latency() {
        let source = MockDataSource::new(10_000, Duration::from_millis(500));
        let start = tokio::time::Instant::now();
        let records = source.fetch_page(1, 50).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(500));

        let ids: Vec<u64> = records.iter().map(|it| it.id).collect();
        assert_eq!(ids, (0..50).collect::<Vec<_>>());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_page_past_bound_is_empty() {
        let source = MockDataSource::new(10_000, Duration::from_millis(500));
        let records = source.fetch_page(500, 50).await.unwrap();
        assert!(records.is_empty());
    }
}

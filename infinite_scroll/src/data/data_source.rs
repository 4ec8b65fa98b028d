// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::future::Future;

use crate::{FetchError, Record};

/// The retrieval step of the fetcher. In production this is a network or database
/// call; [`crate::MockDataSource`] stands in for it here.
///
/// Implementations return up to `page_size` records for the 1-based `page`, and an
/// empty [`Vec`] for pages that lie past the end of the dataset. Returning an error (or
/// panicking) only fails the request that triggered the call; the fetcher task turns
/// both into a [`crate::FetcherResponse::Error`].
///
/// The returned future must be [`Send`] since the fetcher runs on its own
/// [`tokio::spawn`]ed task.
pub trait DataSource: Send + Sync + 'static {
    fn fetch_page(
        &self,
        page: u64,
        page_size: u64,
    ) -> impl Future<Output = Result<Vec<Record>, FetchError>> + Send;
}

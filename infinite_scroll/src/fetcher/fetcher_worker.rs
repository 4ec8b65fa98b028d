// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{ControllerMessage, DataSource, FetchError, FetcherResponse, LoadRequest,
            Record, apply_filter, resolve_target_page};

/// The controller's ends of the two channels connecting it to a running fetcher task.
#[derive(Debug)]
pub struct FetcherHandle {
    pub request_sender: mpsc::Sender<ControllerMessage>,
    pub response_receiver: mpsc::Receiver<FetcherResponse>,
    /// Completes once every [`Self::request_sender`] clone is dropped (or the response
    /// receiver is dropped) and the task has drained its queue.
    pub join_handle: JoinHandle<()>,
}

/// Spawns the background fetcher task on the current tokio runtime.
///
/// Requests are served one at a time, in arrival order. Each one produces exactly one
/// [`FetcherResponse`], whether the data source succeeds, fails, or panics. There is no
/// cancellation: a request that is already queued or running when the controller moves
/// on to a new search is still answered, and its [`crate::Generation`] lets the
/// controller discard that answer.
///
/// # Panics
///
/// This will panic if called outside of a tokio runtime.
pub fn spawn_fetcher<S: DataSource>(source: S, channel_capacity: usize) -> FetcherHandle {
    let (request_sender, mut request_receiver) =
        mpsc::channel::<ControllerMessage>(channel_capacity);
    let (response_sender, response_receiver) =
        mpsc::channel::<FetcherResponse>(channel_capacity);

    let join_handle = tokio::spawn(async move {
        tracing::debug!(message = "🚀 fetcher task started");

        while let Some(message) = request_receiver.recv().await {
            let response = match message {
                ControllerMessage::Load(request) => handle_request(&source, request).await,
            };
            if response_sender.send(response).await.is_err() {
                tracing::debug!(message = "fetcher response receiver dropped");
                break;
            }
        }

        tracing::debug!(message = "🛑 fetcher task stopped");
    });

    FetcherHandle {
        request_sender,
        response_receiver,
        join_handle,
    }
}

/// Serves one load request. Never fails: every error (and any panic inside the data
/// source) is converted into [`FetcherResponse::Error`] tagged with the request's
/// generation.
pub async fn handle_request<S: DataSource>(
    source: &S,
    request: LoadRequest,
) -> FetcherResponse {
    let generation = request.generation;
    match try_handle_request(source, &request).await {
        Ok(data) => {
            tracing::debug!(
                message = "📦 page served",
                %generation,
                page = request.page,
                search_term = %request.search_term,
                count = data.len()
            );
            FetcherResponse::Data { data, generation }
        }
        Err(error) => {
            tracing::warn!(
                message = "💥 load request failed",
                %generation,
                page = request.page,
                %error
            );
            FetcherResponse::Error {
                error: error.to_string(),
                generation,
            }
        }
    }
}

/// Validates, resolves the target page, fetches, and filters.
///
/// # Errors
///
/// Returns [`FetchError::InvalidRequest`] for a zero page or page size, the data
/// source's own error if it fails, and [`FetchError::Panicked`] if it panics.
pub async fn try_handle_request<S: DataSource>(
    source: &S,
    request: &LoadRequest,
) -> Result<Vec<Record>, FetchError> {
    request.validate()?;

    let target_page =
        resolve_target_page(request.page, request.page_size, &request.search_term);
    if target_page != request.page {
        tracing::debug!(
            message = "🦘 page jump",
            requested_page = request.page,
            target_page,
            search_term = %request.search_term
        );
    }

    let records = AssertUnwindSafe(source.fetch_page(target_page, request.page_size))
        .catch_unwind()
        .await
        .map_err(|_| FetchError::Panicked { page: target_page })??;

    Ok(apply_filter(records, &request.search_term))
}

#[cfg(test)]
mod tests {
    use std::{future::Future, time::Duration};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Generation, MockDataSource};

    #[derive(Debug)]
    struct FailingDataSource;

    impl DataSource for FailingDataSource {
        fn fetch_page(
            &self,
            page: u64,
            _page_size: u64,
        ) -> impl Future<Output = Result<Vec<Record>, FetchError>> + Send {
            let result: Result<Vec<Record>, FetchError> = Err(FetchError::SourceFailed {
                page,
                message: "connection reset".into(),
            });
            async move { result }
        }
    }

    #[derive(Debug)]
    struct PanickingDataSource;

    impl DataSource for PanickingDataSource {
        fn fetch_page(
            &self,
            _page: u64,
            _page_size: u64,
        ) -> impl Future<Output = Result<Vec<Record>, FetchError>> + Send {
            async move { explode() }
        }
    }

    fn explode() -> Result<Vec<Record>, FetchError> { panic!("data source exploded") }

    fn load(page: u64, search_term: &str, generation: u64) -> LoadRequest {
        LoadRequest {
            page,
            page_size: 50,
            search_term: search_term.into(),
            generation: Generation(generation),
        }
    }

    fn data_ids(response: &FetcherResponse) -> Vec<u64> {
        match response {
            FetcherResponse::Data { data, .. } => data.iter().map(|it| it.id).collect(),
            FetcherResponse::Error { error, .. } => panic!("unexpected error: {error}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_page_without_search() {
        let source = MockDataSource::new(10_000, Duration::from_millis(500));
        let response = handle_request(&source, load(1, "", 0)).await;
        assert_eq!(data_ids(&response), (0..50).collect::<Vec<_>>());
    }

    #[tokio::test(start_paused = true)]
    async fn test_numeric_search_jumps_to_containing_page() {
        let source = MockDataSource::new(10_000, Duration::from_millis(500));
        let response = handle_request(&source, load(1, "9999", 1)).await;
        assert_eq!(data_ids(&response), vec![9999]);
        assert_eq!(response.generation(), Generation(1));

        let response = handle_request(&source, load(1, "450", 2)).await;
        let ids = data_ids(&response);
        assert!(ids.contains(&450));
        assert!(ids.iter().all(|it| (450..500).contains(it)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_beyond_bound_is_empty_not_error() {
        let source = MockDataSource::new(10_000, Duration::from_millis(500));
        let response = handle_request(&source, load(1, "123456", 0)).await;
        assert_eq!(data_ids(&response), Vec::<u64>::new());
    }

    #[tokio::test]
    async fn test_source_error_becomes_error_response() {
        let response = handle_request(&FailingDataSource, load(2, "", 7)).await;
        assert_eq!(response, FetcherResponse::Error {
            error: "Data source failed to fetch page 2: connection reset".into(),
            generation: Generation(7),
        });
    }

    #[tokio::test]
    async fn test_panic_becomes_error_response() {
        let response = handle_request(&PanickingDataSource, load(1, "", 3)).await;
        assert_eq!(response, FetcherResponse::Error {
            error: "Data source panicked while fetching page 1".into(),
            generation: Generation(3),
        });
    }

    #[tokio::test]
    async fn test_invalid_request_becomes_error_response() {
        let response = handle_request(&FailingDataSource, load(0, "", 0)).await;
        assert!(matches!(response, FetcherResponse::Error { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_task_answers_every_request_in_order() {
        let source = MockDataSource::new(10_000, Duration::from_millis(500));
        let FetcherHandle {
            request_sender,
            mut response_receiver,
            join_handle,
        } = spawn_fetcher(source, 8);

        request_sender.send(load(1, "", 0).into()).await.unwrap();
        request_sender.send(load(0, "", 0).into()).await.unwrap();
        request_sender.send(load(2, "", 0).into()).await.unwrap();

        let first = response_receiver.recv().await.unwrap();
        let second = response_receiver.recv().await.unwrap();
        let third = response_receiver.recv().await.unwrap();
        assert_eq!(data_ids(&first), (0..50).collect::<Vec<_>>());
        assert!(matches!(second, FetcherResponse::Error { .. }));
        assert_eq!(data_ids(&third), (50..100).collect::<Vec<_>>());

        // Dropping the sender stops the task.
        drop(request_sender);
        join_handle.await.unwrap();
        assert!(response_receiver.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_spawned_task_survives_panics() {
        let FetcherHandle {
            request_sender,
            mut response_receiver,
            ..
        } = spawn_fetcher(PanickingDataSource, 8);

        for generation in 0..3 {
            request_sender
                .send(load(1, "", generation).into())
                .await
                .unwrap();
            let response = response_receiver.recv().await.unwrap();
            assert_eq!(response.generation(), Generation(generation));
            assert!(matches!(response, FetcherResponse::Error { .. }));
        }
    }
}

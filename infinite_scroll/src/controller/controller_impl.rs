// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use tokio::sync::mpsc::{self, error::TrySendError};

use crate::{ControllerError, ControllerMessage, FetcherResponse, Generation, ListView,
            PagerConfig, Record, ScrollMetrics, SessionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Sent { page: u64, generation: Generation },
    /// A request is already outstanding. Not an error.
    SkippedWhileLoading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOutcome {
    Applied { count: u64 },
    Failed,
    /// The response belongs to an older search session and was dropped without touching
    /// any state.
    DiscardedStale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Unchanged,
    Reset(RequestOutcome),
}

/// Owns the [`SessionState`] and the [`ListView`], decides when to ask the fetcher for
/// the next page, and applies the fetcher's responses.
///
/// Every method here is synchronous and only ever called from the single task that
/// runs [`crate::run_event_loop()`]. Requests go out with
/// [`mpsc::Sender::try_send()`]: the `is_loading` gate means at most one request per
/// generation is queued, so a full queue only happens if the fetcher is wedged.
#[derive(Debug)]
pub struct Controller<V: ListView> {
    state: SessionState,
    view: V,
    request_sender: mpsc::Sender<ControllerMessage>,
    scroll_trigger_distance: u64,
}

impl<V: ListView> Controller<V> {
    #[must_use]
    pub fn new(
        config: &PagerConfig,
        view: V,
        request_sender: mpsc::Sender<ControllerMessage>,
    ) -> Self {
        Self {
            state: SessionState::new(config.page_size),
            view,
            request_sender,
            scroll_trigger_distance: config.scroll_trigger_distance,
        }
    }

    /// Initial load.
    ///
    /// # Errors
    ///
    /// See [`Self::request_next_page()`].
    pub fn start(&mut self) -> Result<RequestOutcome, ControllerError> {
        tracing::debug!(message = "🏁 controller start", page_size = self.state.page_size);
        self.request_next_page()
    }

    /// Asks the fetcher for the next page, unless a request is already outstanding.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be queued. The loading state and page
    /// counter are rolled back first, so a later call can retry the same page.
    pub fn request_next_page(&mut self) -> Result<RequestOutcome, ControllerError> {
        if self.state.is_loading {
            return Ok(RequestOutcome::SkippedWhileLoading);
        }

        let request = self.state.begin_request();
        self.view.show_loader();
        let page = request.page;
        let generation = request.generation;

        match self.request_sender.try_send(request.clone().into()) {
            Ok(()) => {
                tracing::debug!(
                    message = "📤 load request sent",
                    page,
                    %generation,
                    search_term = ?request.search_term
                );
                Ok(RequestOutcome::Sent { page, generation })
            }
            Err(error) => {
                self.state.abort_request(&request);
                self.view.hide_loader();
                Err(match error {
                    TrySendError::Full(_) => ControllerError::RequestQueueFull { page },
                    TrySendError::Closed(_) => ControllerError::FetcherDisconnected { page },
                })
            }
        }
    }

    /// Renders `records` if they belong to the current search session.
    pub fn on_response(
        &mut self,
        generation: Generation,
        records: Vec<Record>,
    ) -> ResponseOutcome {
        if !self.state.is_current(generation) {
            tracing::debug!(
                message = "🗑️ discarding stale response",
                %generation,
                current = %self.state.generation
            );
            return ResponseOutcome::DiscardedStale;
        }

        let count = u64::try_from(records.len()).unwrap_or(u64::MAX);
        self.view.append(records);
        self.state.complete_request(count);
        self.view.set_status(self.state.total_items_loaded);
        self.view.hide_loader();

        tracing::debug!(
            message = "📥 page rendered",
            count,
            total_items_loaded = self.state.total_items_loaded
        );
        ResponseOutcome::Applied { count }
    }

    /// A failed request is logged and dropped. It is not retried: the next scroll asks
    /// for the page after it.
    pub fn on_error(&mut self, generation: Generation, description: &str) -> ResponseOutcome {
        if !self.state.is_current(generation) {
            tracing::debug!(
                message = "🗑️ discarding stale error",
                %generation,
                current = %self.state.generation
            );
            return ResponseOutcome::DiscardedStale;
        }

        tracing::error!(message = "💥 fetcher reported an error", error = description);
        self.state.fail_request();
        self.view.hide_loader();
        ResponseOutcome::Failed
    }

    pub fn handle_response(&mut self, response: FetcherResponse) -> ResponseOutcome {
        match response {
            FetcherResponse::Data { data, generation } => self.on_response(generation, data),
            FetcherResponse::Error { error, generation } => self.on_error(generation, &error),
        }
    }

    /// The response channel closed: no reply is ever coming for the outstanding
    /// request.
    pub fn on_fetcher_disconnected(&mut self) {
        tracing::error!(
            message = "🔌 fetcher task disconnected",
            page = self.state.current_page
        );
        self.state.fail_request();
        self.view.hide_loader();
    }

    /// Throws away everything rendered so far and loads page 1 for `new_term`.
    ///
    /// # Errors
    ///
    /// See [`Self::request_next_page()`]. The reset itself always happens.
    pub fn reset_for_new_search(
        &mut self,
        new_term: String,
    ) -> Result<RequestOutcome, ControllerError> {
        self.state.reset(new_term);
        tracing::debug!(
            message = "🔄 new search",
            search_term = ?self.state.search_term,
            generation = %self.state.generation
        );
        self.view.clear();
        self.view.set_status(self.state.total_items_loaded);
        self.request_next_page()
    }

    /// Called with the debounced search input.
    ///
    /// # Errors
    ///
    /// See [`Self::reset_for_new_search()`].
    pub fn handle_search_input(
        &mut self,
        value: String,
    ) -> Result<SearchOutcome, ControllerError> {
        if value == self.state.search_term {
            return Ok(SearchOutcome::Unchanged);
        }
        self.reset_for_new_search(value).map(SearchOutcome::Reset)
    }

    /// Called with the throttled scroll position. Returns [`None`] if the viewport is
    /// not close enough to the bottom to need another page.
    ///
    /// # Errors
    ///
    /// See [`Self::request_next_page()`].
    pub fn handle_scroll(
        &mut self,
        metrics: ScrollMetrics,
    ) -> Result<Option<RequestOutcome>, ControllerError> {
        if !metrics.is_near_bottom(self.scroll_trigger_distance) {
            return Ok(None);
        }
        self.request_next_page().map(Some)
    }

    #[must_use]
    pub fn state(&self) -> &SessionState { &self.state }

    #[must_use]
    pub fn view(&self) -> &V { &self.view }

    pub fn view_mut(&mut self) -> &mut V { &mut self.view }

    #[must_use]
    pub fn into_view(self) -> V { self.view }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{InMemoryListView, LoadRequest, generate_page};

    fn setup(
        capacity: usize,
    ) -> (Controller<InMemoryListView>, mpsc::Receiver<ControllerMessage>) {
        let (sender, receiver) = mpsc::channel(capacity);
        let config = PagerConfig::default();
        let controller = Controller::new(&config, InMemoryListView::new(20, 600), sender);
        (controller, receiver)
    }

    fn expect_load(receiver: &mut mpsc::Receiver<ControllerMessage>) -> LoadRequest {
        match receiver.try_recv() {
            Ok(ControllerMessage::Load(request)) => request,
            Err(error) => panic!("expected a load request, got {error:?}"),
        }
    }

    #[test]
    fn test_start_sends_first_page() {
        let (mut controller, mut receiver) = setup(10);
        let outcome = controller.start().unwrap();
        assert_eq!(
            outcome,
            RequestOutcome::Sent {
                page: 1,
                generation: Generation(0)
            }
        );
        let request = expect_load(&mut receiver);
        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, 50);
        assert_eq!(request.search_term, "");
        assert!(controller.state().is_loading);
        assert!(controller.view().is_loader_visible);
    }

    #[test]
    fn test_request_skipped_while_loading() {
        let (mut controller, mut receiver) = setup(10);
        controller.start().unwrap();
        assert_eq!(
            controller.request_next_page().unwrap(),
            RequestOutcome::SkippedWhileLoading
        );
        expect_load(&mut receiver);
        assert!(receiver.try_recv().is_err());
        assert_eq!(controller.state().current_page, 2);
    }

    #[test]
    fn test_response_is_rendered() {
        let (mut controller, _receiver) = setup(10);
        controller.start().unwrap();
        let outcome = controller.on_response(Generation(0), generate_page(1, 50, 10_000));
        assert_eq!(outcome, ResponseOutcome::Applied { count: 50 });

        let view = controller.view();
        assert_eq!(view.ids(), (0..50).collect::<Vec<_>>());
        assert_eq!(view.status, "Items: 50");
        assert!(!view.is_loader_visible);
        assert!(!controller.state().is_loading);
    }

    #[test]
    fn test_into_view_keeps_rendered_records() {
        let (mut controller, _receiver) = setup(10);
        controller.start().unwrap();
        controller.on_response(Generation(0), generate_page(2, 50, 10_000));

        let view = controller.into_view();
        assert_eq!(view.ids(), (50..100).collect::<Vec<_>>());
        assert_eq!(view.status, "Items: 50");
    }

    #[test]
    fn test_empty_response_still_clears_loading() {
        let (mut controller, _receiver) = setup(10);
        controller.start().unwrap();
        assert_eq!(
            controller.on_response(Generation(0), vec![]),
            ResponseOutcome::Applied { count: 0 }
        );
        assert!(!controller.state().is_loading);
        assert_eq!(controller.view().status, "Items: 0");
    }

    #[test]
    fn test_error_clears_loading_without_retry() {
        let (mut controller, mut receiver) = setup(10);
        controller.start().unwrap();
        expect_load(&mut receiver);

        let outcome = controller.handle_response(FetcherResponse::Error {
            error: "boom".into(),
            generation: Generation(0),
        });
        assert_eq!(outcome, ResponseOutcome::Failed);
        assert!(!controller.state().is_loading);
        assert!(!controller.view().is_loader_visible);
        assert!(receiver.try_recv().is_err());

        // The failed page is not retried.
        controller.request_next_page().unwrap();
        assert_eq!(expect_load(&mut receiver).page, 2);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let (mut controller, mut receiver) = setup(10);
        controller.start().unwrap();
        controller.handle_search_input("45".into()).unwrap();
        let before = controller.state().clone();
        let view_before = controller.view().clone();

        let stale = controller.on_response(Generation(0), generate_page(1, 50, 10_000));
        assert_eq!(stale, ResponseOutcome::DiscardedStale);
        let stale = controller.on_error(Generation(0), "late");
        assert_eq!(stale, ResponseOutcome::DiscardedStale);

        assert_eq!(controller.state(), &before);
        assert_eq!(controller.view(), &view_before);
        assert!(controller.state().is_loading);

        expect_load(&mut receiver);
        let request = expect_load(&mut receiver);
        assert_eq!(request.search_term, "45");
        assert_eq!(request.generation, Generation(1));
    }

    #[test]
    fn test_search_input_resets_session() {
        let (mut controller, mut receiver) = setup(10);
        controller.start().unwrap();
        controller.on_response(Generation(0), generate_page(1, 50, 10_000));
        controller.request_next_page().unwrap();

        let outcome = controller.handle_search_input("Item".into()).unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Reset(RequestOutcome::Sent {
                page: 1,
                generation: Generation(1)
            })
        );
        let state = controller.state();
        assert_eq!(state.current_page, 2);
        assert_eq!(state.total_items_loaded, 0);
        assert_eq!(state.search_term, "Item");
        let view = controller.view();
        assert!(view.records.is_empty());
        assert_eq!(view.clear_count, 1);
        assert_eq!(view.status, "Items: 0");

        let pages: Vec<_> = std::iter::from_fn(|| receiver.try_recv().ok())
            .map(|ControllerMessage::Load(it)| (it.page, it.generation))
            .collect();
        assert_eq!(
            pages,
            vec![(1, Generation(0)), (2, Generation(0)), (1, Generation(1))]
        );
    }

    #[test]
    fn test_same_search_input_is_ignored() {
        let (mut controller, _receiver) = setup(10);
        controller.start().unwrap();
        assert_eq!(
            controller.handle_search_input(String::new()).unwrap(),
            SearchOutcome::Unchanged
        );
        assert_eq!(controller.state().generation, Generation(0));
    }

    #[test]
    fn test_scroll_far_from_bottom_does_nothing() {
        let (mut controller, mut receiver) = setup(10);
        controller.start().unwrap();
        expect_load(&mut receiver);
        controller.on_response(Generation(0), generate_page(1, 50, 10_000));

        let metrics = controller.view().scroll_metrics_at_top();
        assert_eq!(controller.handle_scroll(metrics).unwrap(), None);

        let metrics = controller.view().scroll_metrics_at_bottom();
        assert_eq!(
            controller.handle_scroll(metrics).unwrap(),
            Some(RequestOutcome::Sent {
                page: 2,
                generation: Generation(0)
            })
        );
    }

    #[test]
    fn test_send_to_dropped_fetcher_rolls_back() {
        let (mut controller, receiver) = setup(10);
        drop(receiver);
        let error = controller.start().unwrap_err();
        assert_eq!(error, ControllerError::FetcherDisconnected { page: 1 });
        assert!(!controller.state().is_loading);
        assert_eq!(controller.state().current_page, 1);
        assert!(!controller.view().is_loader_visible);
    }

    #[test]
    fn test_full_queue_rolls_back() {
        let (mut controller, _receiver) = setup(1);
        controller.start().unwrap();
        let error = controller.reset_for_new_search("7".into()).unwrap_err();
        assert_eq!(error, ControllerError::RequestQueueFull { page: 1 });
        assert!(!controller.state().is_loading);
        assert_eq!(controller.state().search_term, "7");
    }

    #[test]
    fn test_fetcher_disconnected_clears_loading() {
        let (mut controller, _receiver) = setup(10);
        controller.start().unwrap();
        controller.on_fetcher_disconnected();
        assert!(!controller.state().is_loading);
        assert!(!controller.view().is_loader_visible);
    }
}

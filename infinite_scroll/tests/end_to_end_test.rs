// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Controller, fetcher task, and event loop wired together the way `isl` wires them,
//! driven on a paused clock.

use std::time::Duration;

use pretty_assertions::assert_eq;
use r3bl_infinite_scroll::{Controller, ControllerMessage, FetcherResponse, Generation,
                           InMemoryListView, LoadRequest, MockDataSource, PagerConfig,
                           ResponseOutcome, ScrollMetrics, UiEvent, WireMessage,
                           handle_request, run_event_loop, spawn_fetcher, title_for_id};
use tokio::{sync::mpsc, task::JoinHandle};

const LATENCY: Duration = Duration::from_millis(500);

#[derive(Debug)]
struct Session {
    ui_event_sender: mpsc::Sender<UiEvent>,
    join_handle: JoinHandle<Controller<InMemoryListView>>,
}

impl Session {
    fn start() -> Self {
        let config = PagerConfig::default();
        let fetcher = spawn_fetcher(MockDataSource::from(&config), config.channel_capacity);
        let controller = Controller::new(
            &config,
            InMemoryListView::new(20, 600),
            fetcher.request_sender,
        );
        let (ui_event_sender, ui_event_receiver) = mpsc::channel(config.channel_capacity);
        let join_handle = tokio::spawn(async move {
            run_event_loop(
                controller,
                ui_event_receiver,
                fetcher.response_receiver,
                &config,
            )
            .await
        });
        Self {
            ui_event_sender,
            join_handle,
        }
    }

    async fn send(&self, event: UiEvent) { self.ui_event_sender.send(event).await.unwrap(); }

    async fn stop(self) -> Controller<InMemoryListView> {
        self.send(UiEvent::Shutdown).await;
        self.join_handle.await.unwrap()
    }
}

#[tokio::test(start_paused = true)]
async fn test_initial_load_renders_first_page() {
    let session = Session::start();
    tokio::time::sleep(LATENCY + Duration::from_millis(10)).await;

    let controller = session.stop().await;
    let view = controller.view();
    assert_eq!(view.ids(), (0..50).collect::<Vec<_>>());
    assert_eq!(view.status, "Items: 50");
    assert!(!view.is_loader_visible);
    assert_eq!(view.records[7].title, "Item #7");
}

#[tokio::test(start_paused = true)]
async fn test_nothing_renders_before_latency_elapses() {
    let session = Session::start();
    tokio::time::sleep(LATENCY - Duration::from_millis(10)).await;

    let controller = session.stop().await;
    assert!(controller.view().records.is_empty());
    assert!(controller.view().is_loader_visible);
    assert!(controller.state().is_loading);
}

#[tokio::test(start_paused = true)]
async fn test_numeric_search_jumps_to_last_page() {
    let session = Session::start();
    tokio::time::sleep(LATENCY * 2).await;

    session.send(UiEvent::SearchInput("9999".into())).await;
    tokio::time::sleep(Duration::from_millis(300) + LATENCY * 2).await;

    let controller = session.stop().await;
    let view = controller.view();
    // Page 200 holds ids 9950..=9999, only one of which has "9999" in its title.
    assert_eq!(view.ids(), vec![9999]);
    assert_eq!(view.records[0].title, title_for_id(9999));
    assert_eq!(view.status, "Items: 1");
    assert_eq!(controller.state().current_page, 2);
}

#[tokio::test(start_paused = true)]
async fn test_scroll_after_search_continues_from_own_page_counter() {
    let session = Session::start();
    tokio::time::sleep(LATENCY * 2).await;

    session.send(UiEvent::SearchInput("Item".into())).await;
    tokio::time::sleep(Duration::from_millis(300) + LATENCY * 2).await;
    session
        .send(UiEvent::Scroll(ScrollMetrics::scrolled_to_bottom(1_000, 600)))
        .await;
    tokio::time::sleep(LATENCY * 2).await;

    let controller = session.stop().await;
    assert_eq!(controller.view().ids(), (0..100).collect::<Vec<_>>());
    assert_eq!(controller.state().total_items_loaded, 100);
    assert_eq!(controller.state().generation, Generation(1));
}

#[tokio::test(start_paused = true)]
async fn test_search_while_loading_discards_stale_page() {
    let session = Session::start();
    // The debounce releases the search at 400ms, while the initial page (due at 500ms)
    // is still in flight.
    tokio::time::sleep(Duration::from_millis(100)).await;
    session.send(UiEvent::SearchInput("45".into())).await;
    tokio::time::sleep(Duration::from_millis(300) + LATENCY * 3).await;

    let controller = session.stop().await;
    let view = controller.view();
    assert_eq!(view.ids(), vec![45]);
    assert_eq!(view.clear_count, 1);
    assert_eq!(controller.state().total_items_loaded, 1);
}

#[tokio::test(start_paused = true)]
async fn test_reset_before_initial_response_arrives() {
    let config = PagerConfig::default();
    let mut fetcher = spawn_fetcher(MockDataSource::from(&config), config.channel_capacity);
    let mut controller =
        Controller::new(&config, InMemoryListView::default(), fetcher.request_sender);

    controller.start().unwrap();
    controller.handle_search_input("120".into()).unwrap();

    // The fetcher answers in order: the abandoned initial page first.
    let stale = fetcher.response_receiver.recv().await.unwrap();
    assert_eq!(stale.generation(), Generation(0));
    assert_eq!(
        controller.handle_response(stale),
        ResponseOutcome::DiscardedStale
    );
    assert!(controller.view().records.is_empty());
    assert!(controller.state().is_loading);

    let fresh = fetcher.response_receiver.recv().await.unwrap();
    assert_eq!(
        controller.handle_response(fresh),
        ResponseOutcome::Applied { count: 1 }
    );
    assert_eq!(controller.view().ids(), vec![120]);
}

#[tokio::test(start_paused = true)]
async fn test_responses_survive_the_wire() {
    let config = PagerConfig::default();
    let source = MockDataSource::from(&config);
    let request = ControllerMessage::from(LoadRequest {
        page: 1,
        page_size: 5,
        search_term: String::new(),
        generation: Generation(3),
    });

    let decoded = ControllerMessage::try_decode(&request.try_encode().unwrap())
        .unwrap()
        .unwrap();
    let ControllerMessage::Load(load_request) = decoded;
    let response = handle_request(&source, load_request).await;

    let decoded = FetcherResponse::try_decode(&response.try_encode().unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(decoded, response);
    assert_eq!(decoded.generation(), Generation(3));
}

// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use tokio::{sync::mpsc, time::Instant};

use crate::{Controller, ControllerError, Debounce, FetcherResponse, ListView, PagerConfig,
            Throttle, UiEvent};

/// Drives a [`Controller`] until the front end asks it to stop.
///
/// Issues the initial load, then multiplexes three sources:
/// 1. [`UiEvent`]s from the front end. Scrolls pass through a [`Throttle`] and search
///    input passes through a [`Debounce`].
/// 2. The debounce deadline, which releases the latest search input to
///    [`Controller::handle_search_input()`].
/// 3. [`FetcherResponse`]s from the fetcher task.
///
/// Returns the controller (and with it the view) when [`UiEvent::Shutdown`] arrives or
/// every UI event sender is dropped. If the fetcher's response channel closes, the
/// controller is told via [`Controller::on_fetcher_disconnected()`] and the loop keeps
/// serving UI events, which will then fail to issue requests.
///
/// Controller errors are logged, never fatal.
pub async fn run_event_loop<V: ListView>(
    mut controller: Controller<V>,
    mut ui_event_receiver: mpsc::Receiver<UiEvent>,
    mut response_receiver: mpsc::Receiver<FetcherResponse>,
    config: &PagerConfig,
) -> Controller<V> {
    let mut scroll_throttle = Throttle::new(config.scroll_throttle);
    let mut search_debounce = Debounce::<String>::new(config.search_debounce);
    let mut is_fetcher_connected = true;

    log_if_err(controller.start());

    loop {
        tokio::select! {
            // Handle UI events.
            maybe_event = ui_event_receiver.recv() => {
                let Some(event) = maybe_event else {
                    tracing::debug!(message = "ui event channel closed");
                    break;
                };
                tracing::trace!(message = "ui event", event = event.as_ref());
                match event {
                    UiEvent::Scroll(metrics) => {
                        let maybe_result = scroll_throttle
                            .call(Instant::now(), || controller.handle_scroll(metrics));
                        if let Some(result) = maybe_result {
                            log_if_err(result);
                        }
                    }
                    UiEvent::SearchInput(value) => {
                        controller.view_mut().echo_search_input(&value);
                        search_debounce.push(value);
                    }
                    UiEvent::Shutdown => break,
                }
            }

            // Search input has been quiet for long enough.
            () = search_debounce.sleep_until(), if search_debounce.is_pending() => {
                if let Some(value) = search_debounce.take_ready() {
                    log_if_err(controller.handle_search_input(value));
                }
            }

            // Handle fetcher responses.
            maybe_response = response_receiver.recv(), if is_fetcher_connected => {
                match maybe_response {
                    Some(response) => {
                        tracing::trace!(
                            message = "fetcher response",
                            kind = response.as_ref(),
                            generation = %response.generation()
                        );
                        controller.handle_response(response);
                    }
                    None => {
                        is_fetcher_connected = false;
                        controller.on_fetcher_disconnected();
                    }
                }
            }
        }
    }

    tracing::debug!(
        message = "🛑 event loop stopped",
        total_items_loaded = controller.state().total_items_loaded
    );
    controller
}

fn log_if_err<T>(result: Result<T, ControllerError>) {
    if let Err(error) = result {
        tracing::error!(message = "⚠️ controller error", %error);
    }
}

// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use tokio::sync::mpsc;

use crate::{Controller, ControllerError, FetcherResponse, ListView, RequestOutcome,
            ResponseOutcome, ScrollMetrics, SearchOutcome};

/// What a scripted, non interactive session does, in order: the initial load, then
/// (optionally) one search, then `scroll_count` scrolls to the bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessScript {
    pub search: Option<String>,
    pub scroll_count: u32,
}

/// Runs `script` against `controller` without any rate limiting: every step waits for
/// its response before the next step starts, so the outcome is deterministic.
/// `on_response` sees every response the fetcher sends, stale ones included.
///
/// # Errors
///
/// Returns an error if a request could not be sent, or if the fetcher goes away while a
/// response is outstanding.
pub async fn run_headless_session<V: ListView>(
    controller: &mut Controller<V>,
    response_receiver: &mut mpsc::Receiver<FetcherResponse>,
    script: &HeadlessScript,
    mut on_response: impl FnMut(&FetcherResponse),
) -> Result<(), ControllerError> {
    let outcome = controller.start()?;
    await_outcome(controller, response_receiver, outcome, &mut on_response).await?;

    if let Some(term) = &script.search {
        let outcome = match controller.handle_search_input(term.clone())? {
            SearchOutcome::Reset(outcome) => outcome,
            SearchOutcome::Unchanged => RequestOutcome::SkippedWhileLoading,
        };
        await_outcome(controller, response_receiver, outcome, &mut on_response).await?;
    }

    for _ in 0..script.scroll_count {
        // No viewport, so every scroll lands on the very bottom of the content.
        if let Some(outcome) = controller.handle_scroll(ScrollMetrics::default())? {
            await_outcome(controller, response_receiver, outcome, &mut on_response).await?;
        }
    }

    Ok(())
}

/// Waits until the response for a request that was just sent has been applied.
async fn await_outcome<V: ListView>(
    controller: &mut Controller<V>,
    response_receiver: &mut mpsc::Receiver<FetcherResponse>,
    outcome: RequestOutcome,
    on_response: &mut impl FnMut(&FetcherResponse),
) -> Result<(), ControllerError> {
    let RequestOutcome::Sent { page, .. } = outcome else {
        return Ok(());
    };
    loop {
        let Some(response) = response_receiver.recv().await else {
            controller.on_fetcher_disconnected();
            return Err(ControllerError::FetcherDisconnected { page });
        };
        on_response(&response);
        match controller.handle_response(response) {
            ResponseOutcome::DiscardedStale => continue,
            ResponseOutcome::Applied { .. } | ResponseOutcome::Failed => return Ok(()),
        }
    }
}

// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Failures of the controller → fetcher request path. None of these are fatal: the
/// controller rolls back its loading state, so the next scroll or search can try again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ControllerError {
    #[error("Fetcher task is not running, could not send request for page {page}")]
    #[diagnostic(
        code(r3bl_infinite_scroll::controller::fetcher_disconnected),
        help("The fetcher task exited or panicked, restart the session")
    )]
    FetcherDisconnected { page: u64 },

    #[error("Fetcher request queue is full, could not send request for page {page}")]
    #[diagnostic(code(r3bl_infinite_scroll::controller::request_queue_full))]
    RequestQueueFull { page: u64 },
}

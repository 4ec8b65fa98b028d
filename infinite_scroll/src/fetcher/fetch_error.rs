// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Everything that can go wrong while serving one [`crate::LoadRequest`]. None of these
/// escape the fetcher task: they are rendered with [`ToString`] into a
/// [`crate::FetcherResponse::Error`] and only fail the request that caused them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum FetchError {
    #[error("Invalid load request: {reason}")]
    #[diagnostic(code(r3bl_infinite_scroll::fetcher::invalid_request))]
    InvalidRequest { reason: String },

    #[error("Data source failed to fetch page {page}: {message}")]
    #[diagnostic(code(r3bl_infinite_scroll::fetcher::source_failed))]
    SourceFailed { page: u64, message: String },

    #[error("Data source panicked while fetching page {page}")]
    #[diagnostic(
        code(r3bl_infinite_scroll::fetcher::panicked),
        help("The fetcher task is still running, the next request will be served")
    )]
    Panicked { page: u64 },
}

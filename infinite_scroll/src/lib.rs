// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_infinite_scroll
//!
//! Incrementally load a large, paged dataset into a scrolling list, with live search
//! that can jump straight to the page containing a numeric id instead of scanning from
//! the first page.
//!
//! There are two halves, and they only talk to each other over [`tokio::sync::mpsc`]
//! channels:
//!
//! ```text
//! ┌────────────────────────────┐  LoadRequest   ┌──────────────────────────────┐
//! │ Controller (event loop)    │ ─────────────▶ │ Fetcher task                 │
//! │ - SessionState             │                │ - resolve_target_page()      │
//! │ - Throttle (scroll)        │ ◀───────────── │ - DataSource::fetch_page()   │
//! │ - Debounce (search input)  │ FetcherResponse│ - apply_filter()             │
//! └────────────────────────────┘                └──────────────────────────────┘
//! ```
//!
//! 1. A [`UiEvent`] arrives (scroll, search input) and passes through its rate limiter.
//! 2. The [`Controller`] decides whether to issue a [`LoadRequest`]. The `is_loading`
//!    flag in [`SessionState`] allows at most one outstanding request.
//! 3. The fetcher task resolves the effective page, fetches, filters, and always
//!    replies with exactly one [`FetcherResponse`].
//! 4. The controller renders the records into its [`ListView`] and becomes eligible to
//!    issue the next request.
//!
//! Every request carries the [`Generation`] of the search session that issued it. A new
//! search bumps the generation, so a late reply for the previous search is discarded
//! instead of being counted against the new one.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod config;
pub mod controller;
pub mod data;
pub mod diagnostics;
pub mod event_loop;
pub mod fetcher;
pub mod log;
pub mod protocol;
pub mod rate_limit;
pub mod view;

// Re-export.
pub use config::*;
pub use controller::*;
pub use data::*;
pub use diagnostics::*;
pub use event_loop::*;
pub use fetcher::*;
pub use log::*;
pub use protocol::*;
pub use rate_limit::*;
pub use view::*;

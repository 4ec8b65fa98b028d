// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod fetch_error;
pub mod fetcher_worker;
pub mod record_filter;
pub mod target_page;

// Re-export.
pub use fetch_error::*;
pub use fetcher_worker::*;
pub use record_filter::*;
pub use target_page::*;

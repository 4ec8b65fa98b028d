// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod in_memory_list_view;
pub mod list_view_trait;
pub mod scroll_metrics;
pub mod terminal_list_view;

// Re-export.
pub use in_memory_list_view::*;
pub use list_view_trait::*;
pub use scroll_metrics::*;
pub use terminal_list_view::*;

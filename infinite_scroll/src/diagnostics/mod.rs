// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod miette_setup_global_report_handler;

// Re-export.
pub use miette_setup_global_report_handler::*;

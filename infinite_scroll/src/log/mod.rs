// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging is **disabled** by default. The `isl` binary turns it on with
//! `--enable-logging`, which writes to [`tracing_config::DEFAULT_LOG_FILE_NAME`] so
//! that log output never interleaves with the terminal UI.

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;

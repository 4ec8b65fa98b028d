// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod headless_session;
pub mod main_event_loop;
pub mod terminal_input;
pub mod ui_event;

// Re-export.
pub use headless_session::*;
pub use main_event_loop::*;
pub use terminal_input::*;
pub use ui_event::*;

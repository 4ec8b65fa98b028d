// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod controller_error;
pub mod controller_impl;
pub mod session_state;

// Re-export.
pub use controller_error::*;
pub use controller_impl::*;
pub use session_state::*;

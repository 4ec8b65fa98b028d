// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Two local rate limiters for UI events. Both bound how often a *trigger* may fire,
//! independent of whether a load request is still outstanding (that is what
//! `SessionState::is_loading` is for).
//!
//! | Gate         | Policy                                            | Used for      |
//! | :----------- | :------------------------------------------------ | :------------ |
//! | [`Throttle`] | Run now, then drop calls until the interval ends   | Scroll events |
//! | [`Debounce`] | Wait for a quiet period, then run with the latest | Search input  |

// Attach sources.
pub mod debounce;
pub mod throttle;

// Re-export.
pub use debounce::*;
pub use throttle::*;

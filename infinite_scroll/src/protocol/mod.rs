// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod json_codec;
pub mod protocol_types;

// Re-export.
pub use json_codec::*;
pub use protocol_types::*;

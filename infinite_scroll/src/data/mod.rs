// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod data_source;
pub mod mock_data_source;
pub mod record;

// Re-export.
pub use data_source::*;
pub use mock_data_source::*;
pub use record::*;

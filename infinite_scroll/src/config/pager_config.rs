// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

/// Default values. These are fixed once a [`PagerConfig`] is handed to the controller
/// and the fetcher; nothing reconfigures them at runtime.
pub mod pager_config_defaults {
    use std::time::Duration;

    pub const PAGE_SIZE: u64 = 50;
    /// Ids are generated in `0..DATASET_BOUND`.
    pub const DATASET_BOUND: u64 = 10_000;
    /// Distance (in rows or pixels, whatever unit the view measures in) from the bottom
    /// of the rendered content that triggers the next page load.
    pub const SCROLL_TRIGGER_DISTANCE: u64 = 200;
    pub const SCROLL_THROTTLE_MS: u64 = 100;
    pub const SEARCH_DEBOUNCE_MS: u64 = 300;
    pub const SIMULATED_LATENCY_MS: u64 = 500;
    pub const SCROLL_THROTTLE: Duration = Duration::from_millis(SCROLL_THROTTLE_MS);
    pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(SEARCH_DEBOUNCE_MS);
    pub const SIMULATED_LATENCY: Duration = Duration::from_millis(SIMULATED_LATENCY_MS);
    pub const CHANNEL_CAPACITY: usize = 1_000;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerConfig {
    pub page_size: u64,
    pub dataset_bound: u64,
    pub scroll_trigger_distance: u64,
    pub scroll_throttle: Duration,
    pub search_debounce: Duration,
    pub simulated_latency: Duration,
    pub channel_capacity: usize,
}

impl Default for PagerConfig {
    fn default() -> Self {
        use pager_config_defaults as defaults;
        Self {
            page_size: defaults::PAGE_SIZE,
            dataset_bound: defaults::DATASET_BOUND,
            scroll_trigger_distance: defaults::SCROLL_TRIGGER_DISTANCE,
            scroll_throttle: defaults::SCROLL_THROTTLE,
            search_debounce: defaults::SEARCH_DEBOUNCE,
            simulated_latency: defaults::SIMULATED_LATENCY,
            channel_capacity: defaults::CHANNEL_CAPACITY,
        }
    }
}

impl PagerConfig {
    /// # Errors
    ///
    /// Returns an error if the page size, dataset bound, or channel capacity is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.dataset_bound == 0 {
            return Err(ConfigError::ZeroDatasetBound);
        }
        if self.channel_capacity == 0 {
            return Err(ConfigError::ZeroChannelCapacity);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    #[error("Page size must be greater than zero")]
    #[diagnostic(
        code(r3bl_infinite_scroll::config::zero_page_size),
        help("Pass a positive value to `--page-size`")
    )]
    ZeroPageSize,

    #[error("Dataset bound must be greater than zero")]
    #[diagnostic(
        code(r3bl_infinite_scroll::config::zero_dataset_bound),
        help("Pass a positive value to `--dataset-bound`")
    )]
    ZeroDatasetBound,

    #[error("Channel capacity must be greater than zero")]
    #[diagnostic(code(r3bl_infinite_scroll::config::zero_channel_capacity))]
    ZeroChannelCapacity,
}

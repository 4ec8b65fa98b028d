// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use clap::{Args, Parser};

use super::{ConfigError, PagerConfig, pager_config_defaults};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "isl")]
#[command(about = "📜 Infinite scroll list with page jumping search")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nType to search, scroll down to load more. Run with `--headless` to script a session instead.\nUSAGE 📓:\n  isl [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[command(flatten)]
    pub pager_options: PagerOption,

    #[command(flatten)]
    pub headless_options: HeadlessOption,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct PagerOption {
    #[arg(long, default_value_t = pager_config_defaults::PAGE_SIZE, help = "Records per page")]
    pub page_size: u64,

    #[arg(
        long,
        default_value_t = pager_config_defaults::DATASET_BOUND,
        help = "Number of records in the mock dataset"
    )]
    pub dataset_bound: u64,

    #[arg(
        long,
        default_value_t = pager_config_defaults::SCROLL_TRIGGER_DISTANCE,
        help = "Load the next page when this close to the bottom"
    )]
    pub scroll_distance: u64,

    #[arg(
        long,
        default_value_t = pager_config_defaults::SCROLL_THROTTLE_MS,
        help = "Scroll trigger throttle interval (ms)"
    )]
    pub throttle_ms: u64,

    #[arg(
        long,
        default_value_t = pager_config_defaults::SEARCH_DEBOUNCE_MS,
        help = "Search input debounce interval (ms)"
    )]
    pub debounce_ms: u64,

    #[arg(
        long,
        default_value_t = pager_config_defaults::SIMULATED_LATENCY_MS,
        help = "Simulated fetch latency (ms)"
    )]
    pub latency_ms: u64,
}

#[derive(Debug, Args)]
pub struct HeadlessOption {
    #[arg(
        long,
        help = "Run a scripted session and print results instead of the interactive UI"
    )]
    pub headless: bool,

    #[arg(long, short = 's', help = "Search term to submit after the initial load")]
    pub search: Option<String>,

    #[arg(
        long,
        default_value_t = 0,
        help = "Number of times to scroll to the bottom after the initial load"
    )]
    pub scroll: u32,

    #[arg(long, help = "Print fetcher responses as JSON lines (headless only)")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `isl_log.txt` for debugging."
    )]
    pub enable_logging: bool,
}

impl TryFrom<&PagerOption> for PagerConfig {
    type Error = ConfigError;

    fn try_from(options: &PagerOption) -> Result<Self, Self::Error> {
        let config = PagerConfig {
            page_size: options.page_size,
            dataset_bound: options.dataset_bound,
            scroll_trigger_distance: options.scroll_distance,
            scroll_throttle: Duration::from_millis(options.throttle_ms),
            search_debounce: Duration::from_millis(options.debounce_ms),
            simulated_latency: Duration::from_millis(options.latency_ms),
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }
}

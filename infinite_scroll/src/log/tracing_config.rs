// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::try_create_layers;

pub const DEFAULT_LOG_FILE_NAME: &str = "isl_log.txt";

/// Where the logs go, and how much of them.
///
/// Build one from a [`WriterConfig`], a [`DisplayPreference`], or a [`LevelFilter`] via
/// [`From`], and compose them with `+`:
///
/// ```
/// use r3bl_infinite_scroll::{DisplayPreference, TracingConfig, WriterConfig};
///
/// let config = TracingConfig::from(tracing_core::LevelFilter::TRACE)
///     + TracingConfig::from(DisplayPreference::Stderr);
/// assert_eq!(config.level_filter, tracing_core::LevelFilter::TRACE);
/// assert_eq!(
///     config.writer_config,
///     WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "isl_log.txt".into())
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// The `String` is the path of the log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Global default subscriber, which once set, can't be unset or changed. Does
    /// nothing if the level filter is [`LevelFilter::OFF`].
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created, or a global subscriber is
    /// already installed.
    pub fn install_global(self) -> miette::Result<()> {
        if self.level_filter == LevelFilter::OFF {
            return Ok(());
        }
        let layers = try_create_layers(self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|error| miette::miette!("Can't install global subscriber: {error}"))
    }

    /// Thread local subscriber, active until the returned guard is dropped. Meant for
    /// tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created.
    pub fn install_thread_local(self) -> miette::Result<dispatcher::DefaultGuard> {
        let layers = try_create_layers(self)?;
        let subscriber = tracing_subscriber::registry().with(layers);
        Ok(tracing::subscriber::set_default(subscriber))
    }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(preferred_display: DisplayPreference) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config: WriterConfig::Display(preferred_display),
        }
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

/// The more verbose level filter wins, and the writer configs are merged.
impl Add<TracingConfig> for TracingConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
        }
    }
}

/// A display and a file combine into [`WriterConfig::DisplayAndFile`]. On a collision
/// the `rhs` wins, since display preferences and paths can't be merged.
impl Add<WriterConfig> for WriterConfig {
    type Output = Self;

    fn add(self, rhs: WriterConfig) -> Self::Output {
        use WriterConfig::{Display, DisplayAndFile, File, None};

        match (self, rhs) {
            (None, it) | (it, None) => it,
            (Display(display), File(file)) | (File(file), Display(display)) => {
                DisplayAndFile(display, file)
            }
            (Display(_), Display(display)) => Display(display),
            (File(_), File(file)) => File(file),
            (Display(_) | File(_), DisplayAndFile(display, file)) => {
                DisplayAndFile(display, file)
            }
            (DisplayAndFile(_, file), Display(display)) => DisplayAndFile(display, file),
            (DisplayAndFile(display, _), File(file)) => DisplayAndFile(display, file),
            (DisplayAndFile(..), DisplayAndFile(display, file)) => {
                DisplayAndFile(display, file)
            }
        }
    }
}

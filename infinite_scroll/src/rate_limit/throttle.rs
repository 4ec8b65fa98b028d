// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use tokio::time::Instant;

/// This enum represents the status of the throttle at a given instant:
/// - [`ThrottleStatus::NotStarted`]: Nothing has run through the throttle yet.
/// - [`ThrottleStatus::Expired`]: The interval since the last run has elapsed.
/// - [`ThrottleStatus::Active`]: The last run was less than one interval ago, so calls
///   are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleStatus {
    NotStarted,
    Expired,
    Active,
}

/// Leading edge throttle: the first call runs immediately, and every call after it is
/// dropped (not queued) until `interval` has passed since the last call that ran.
///
/// The caller passes `now` in, so tests can drive it with fixed instants. Inside the
/// event loop it is [`tokio::time::Instant::now()`], which respects a paused clock.
///
/// ```
/// use std::time::Duration;
/// use tokio::time::Instant;
/// use r3bl_infinite_scroll::Throttle;
///
/// let mut throttle = Throttle::new(Duration::from_millis(100));
/// let now = Instant::now();
/// let mut count = 0;
/// throttle.call(now, || count += 1);
/// throttle.call(now + Duration::from_millis(50), || count += 1);
/// throttle.call(now + Duration::from_millis(100), || count += 1);
/// assert_eq!(count, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Throttle {
    last_run: Option<Instant>,
    interval: Duration,
}

impl Throttle {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            last_run: None,
            interval,
        }
    }

    #[must_use]
    pub fn status(&self, now: Instant) -> ThrottleStatus {
        match self.last_run {
            None => ThrottleStatus::NotStarted,
            Some(last_run) if now.saturating_duration_since(last_run) >= self.interval => {
                ThrottleStatus::Expired
            }
            Some(_) => ThrottleStatus::Active,
        }
    }

    /// Runs `f` and returns its result, unless the throttle is
    /// [`ThrottleStatus::Active`], in which case `f` is dropped and [`None`] is
    /// returned.
    pub fn call<R>(&mut self, now: Instant, f: impl FnOnce() -> R) -> Option<R> {
        match self.status(now) {
            ThrottleStatus::NotStarted | ThrottleStatus::Expired => {
                self.last_run.replace(now);
                Some(f())
            }
            ThrottleStatus::Active => None,
        }
    }

    #[must_use]
    pub fn last_run(&self) -> Option<Instant> { self.last_run }
}

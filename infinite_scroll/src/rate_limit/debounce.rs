// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use tokio::time::Instant;

/// Trailing edge debounce for the "do X with the latest value after Y ms of no
/// activity" pattern. Each [`push()`](Self::push) replaces the pending value and pushes
/// the deadline out by `quiet_period`; only the value present when the deadline finally
/// passes is released.
///
/// # Integration with `tokio::select!`
///
/// ```rust,no_run
/// use std::time::Duration;
/// use r3bl_infinite_scroll::Debounce;
///
/// # async fn example() {
/// let mut debounce = Debounce::new(Duration::from_millis(300));
///
/// loop {
///     tokio::select! {
///         text = read_input() => debounce.push(text),
///         () = debounce.sleep_until(), if debounce.is_pending() => {
///             if let Some(text) = debounce.take_ready() {
///                 println!("search for {text}");
///             }
///         }
///     }
/// }
/// # async fn read_input() -> String { String::new() }
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    /// None means nothing is pending.
    deadline: Option<Instant>,
    pending: Option<T>,
    quiet_period: Duration,
}

impl<T> Debounce<T> {
    #[must_use]
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            deadline: None,
            pending: None,
            quiet_period,
        }
    }

    /// Replaces the pending value and restarts the quiet period.
    pub fn push(&mut self, value: T) {
        self.pending = Some(value);
        self.deadline = Some(Instant::now() + self.quiet_period);
    }

    #[must_use]
    pub fn is_pending(&self) -> bool { self.deadline.is_some() }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> { self.deadline }

    /// Sleeps until the deadline. If nothing is pending this never completes, so guard
    /// the `tokio::select!` branch with [`Self::is_pending()`].
    pub async fn sleep_until(&self) {
        match self.deadline {
            Some(deadline) => tokio::time::sleep_until(deadline).await,
            None => std::future::pending().await,
        }
    }

    /// Releases the pending value if the quiet period is over, clearing the debounce.
    /// Returns [`None`] if nothing is pending or the deadline has not passed yet.
    pub fn take_ready(&mut self) -> Option<T> {
        let deadline = self.deadline?;
        if Instant::now() < deadline {
            return None;
        }
        self.deadline = None;
        self.pending.take()
    }

    /// Hands the released value to `f`, see [`Self::take_ready()`].
    pub fn call_if_ready<R>(&mut self, f: impl FnOnce(T) -> R) -> Option<R> {
        self.take_ready().map(f)
    }

    /// Drops the pending value without releasing it.
    pub fn cancel(&mut self) {
        self.deadline = None;
        self.pending = None;
    }
}

//! Debounced search scheduling
//!
//! Two states: idle (no deadline) and pending (one deadline armed).
//! `request_soon` (re)arms the deadline, `request_now` disarms it and tells
//! the caller to search right away. The owner awaits [`Scheduler::expired`]
//! in its event loop and searches when it resolves.

use crate::constants::search::DEBOUNCE_MS;
use std::time::Duration;
use tokio::time::Instant;
use tracing::trace;

/// Single-timer debouncer for search triggers
#[derive(Debug)]
pub struct Scheduler {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Scheduler {
    /// Create a scheduler with a custom quiet period
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether a delayed search is armed
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Arm the delayed search, replacing any deadline already armed
    pub fn request_soon(&mut self) {
        let deadline = Instant::now() + self.delay;
        if self.deadline.replace(deadline).is_some() {
            trace!("debounce restarted");
        }
    }

    /// Cancel any armed deadline; the caller searches immediately
    pub fn request_now(&mut self) {
        if self.deadline.take().is_some() {
            trace!("pending search overridden");
        }
    }

    /// Resolve once the armed deadline passes, leaving the scheduler idle
    ///
    /// Never resolves while idle. Dropping the future before it resolves
    /// keeps the deadline armed, so this is safe to use in `select!`.
    pub async fn expired(&mut self) {
        match self.deadline {
            Some(deadline) => {
                tokio::time::sleep_until(deadline).await;
                self.deadline = None;
            }
            None => std::future::pending().await,
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEBOUNCE_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, timeout};

    #[test]
    fn test_default_delay() {
        assert_eq!(Scheduler::default().delay(), Duration::from_millis(90));
        assert!(!Scheduler::default().is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let mut scheduler = Scheduler::default();
        let start = Instant::now();

        scheduler.request_soon();
        assert!(scheduler.is_pending());
        scheduler.expired().await;

        assert!(start.elapsed() >= Duration::from_millis(90));
        assert!(start.elapsed() < Duration::from_millis(91));
        assert!(!scheduler.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_restarts_delay() {
        let mut scheduler = Scheduler::default();
        let start = Instant::now();

        for _ in 0..5 {
            scheduler.request_soon();
            advance(Duration::from_millis(50)).await;
        }
        scheduler.expired().await;

        // Last request at 200ms, plus the 90ms quiet period
        assert!(start.elapsed() >= Duration::from_millis(290));
        assert!(start.elapsed() < Duration::from_millis(291));
        assert!(!scheduler.is_pending());

        // Nothing else is armed after the single trailing fire
        assert!(timeout(Duration::from_secs(1), scheduler.expired()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_request_now_cancels_pending() {
        let mut scheduler = Scheduler::default();

        scheduler.request_soon();
        scheduler.request_now();
        assert!(!scheduler.is_pending());

        assert!(timeout(Duration::from_secs(1), scheduler.expired()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_wait_keeps_deadline() {
        let mut scheduler = Scheduler::default();
        scheduler.request_soon();

        assert!(timeout(Duration::from_millis(10), scheduler.expired()).await.is_err());
        assert!(scheduler.is_pending());

        scheduler.expired().await;
        assert!(!scheduler.is_pending());
    }
}

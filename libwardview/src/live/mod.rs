//! Simulated live data
//!
//! The dashboard panels animate mock data with periodic random walks. Each
//! panel owns a [`LiveFeed`]: a snapshot plus the [`ScheduledTask`] that
//! advances it. Feeds never share state, and dropping a feed cancels its
//! timer so nothing writes to a panel that is no longer displayed.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use libwardview::live::{LiveFeed, census::PatientCensus};
//!
//! # async fn example() -> libwardview::Result<()> {
//! let feed = LiveFeed::start(PatientCensus::default(), Duration::from_secs(8))?;
//! let census = feed.snapshot();
//! println!("{} in-house", census.split().inhouse);
//!
//! // Leaving the view drops the feed and stops the timer
//! drop(feed);
//! # Ok(())
//! # }
//! ```

pub mod availability;
pub mod census;
pub mod pulse;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::error::WardError;
use crate::Result;

/// A periodic callback on the tokio runtime
///
/// The first tick fires one `period` after start. The task is aborted when
/// cancelled or dropped.
pub struct ScheduledTask {
    handle: JoinHandle<()>,
    period: Duration,
    cancelled: bool,
}

impl ScheduledTask {
    /// Run `tick` every `period` on the current tokio runtime
    ///
    /// # Errors
    ///
    /// Returns an error if `period` is zero or no runtime is available.
    pub fn every<F>(period: Duration, tick: F) -> Result<Self>
    where
        F: FnMut() + Send + 'static,
    {
        let runtime = Handle::try_current()
            .map_err(|e| WardError::Scheduler(format!("no tokio runtime: {}", e)))?;
        Self::every_on(&runtime, period, tick)
    }

    /// Run `tick` every `period` on `runtime`
    pub fn every_on<F>(runtime: &Handle, period: Duration, mut tick: F) -> Result<Self>
    where
        F: FnMut() + Send + 'static,
    {
        if period.is_zero() {
            return Err(WardError::InvalidInput(
                "timer period must be greater than zero".to_string(),
            ));
        }

        let handle = runtime.spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                tick();
            }
        });

        tracing::trace!(period_ms = period.as_millis() as u64, "scheduled task started");
        Ok(Self {
            handle,
            period,
            cancelled: false,
        })
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Stop the timer; later calls are no-ops
    pub fn cancel(&mut self) {
        if !self.cancelled {
            self.handle.abort();
            self.cancelled = true;
            tracing::trace!(period_ms = self.period.as_millis() as u64, "scheduled task cancelled");
        }
    }

    pub fn is_active(&self) -> bool {
        !self.cancelled && !self.handle.is_finished()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for ScheduledTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduledTask")
            .field("period", &self.period)
            .field("cancelled", &self.cancelled)
            .finish()
    }
}

/// A snapshot that can advance one random-walk step
pub trait Simulate: Clone + Send + 'static {
    fn step<R: Rng + ?Sized>(&mut self, rng: &mut R);
}

/// A simulator snapshot and the timer that advances it
pub struct LiveFeed<S> {
    snapshot: Arc<Mutex<S>>,
    task: ScheduledTask,
}

impl<S: Simulate> LiveFeed<S> {
    /// Start advancing `initial` every `period` with an entropy-seeded RNG
    pub fn start(initial: S, period: Duration) -> Result<Self> {
        Self::start_with_rng(initial, period, StdRng::from_entropy())
    }

    /// Start with a fixed seed, for reproducible runs
    pub fn start_seeded(initial: S, period: Duration, seed: u64) -> Result<Self> {
        Self::start_with_rng(initial, period, StdRng::seed_from_u64(seed))
    }

    fn start_with_rng(initial: S, period: Duration, mut rng: StdRng) -> Result<Self> {
        let snapshot = Arc::new(Mutex::new(initial));
        let target = Arc::clone(&snapshot);
        let task = ScheduledTask::every(period, move || {
            target
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .step(&mut rng);
        })?;
        Ok(Self { snapshot, task })
    }

    /// Copy of the latest values
    pub fn snapshot(&self) -> S {
        self.snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Freeze the feed at its current values
    pub fn stop(&mut self) {
        self.task.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.task.is_active()
    }

    pub fn period(&self) -> Duration {
        self.task.period()
    }
}

/// One slice of an overall status breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    pub name: String,
    pub value: u32,
    /// Percentage of the total, rounded to one decimal
    pub percentage: f64,
}

/// Split `parts` into rounded percentages of their total
///
/// An all-zero breakdown reports 0% for every part.
pub fn shares(parts: &[(&str, u32)]) -> Vec<Share> {
    let total: u64 = parts.iter().map(|(_, value)| u64::from(*value)).sum();
    parts
        .iter()
        .map(|(name, value)| Share {
            name: (*name).to_string(),
            value: *value,
            percentage: if total == 0 {
                0.0
            } else {
                (f64::from(*value) / total as f64 * 1000.0).round() / 10.0
            },
        })
        .collect()
}

/// Apply a random step to `value`, never going below 1
pub(crate) fn walk<R: Rng + ?Sized>(rng: &mut R, value: u32, low: i64, high: i64) -> u32 {
    let next = i64::from(value) + rng.gen_range(low..=high);
    next.clamp(1, i64::from(u32::MAX)) as u32
}

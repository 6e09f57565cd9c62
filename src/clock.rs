use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

/// A monotonic time source.
///
/// Readings are the time elapsed since the clock's own epoch, so they can be
/// subtracted from each other, and must never go backwards.
pub trait Clock: Send + Sync {
    /// Returns the current reading.
    fn now(&self) -> Duration;
}

/// Clock backed by [`Instant`], starting at zero when created.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    /// Creates a clock whose epoch is now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same reading, so a clone can be handed to a
/// [`crate::RollingWindow`] while the caller keeps advancing time.
///
/// ```
/// use rollwin::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::default();
/// let handle = clock.clone();
///
/// handle.advance(Duration::from_millis(1_500));
/// assert_eq!(Duration::from_millis(1_500), clock.now());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a clock reading zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward.
    #[allow(clippy::cast_possible_truncation)]
    pub fn advance(&self, duration: Duration) {
        let delta = duration.as_nanos().min(u128::from(u64::MAX)) as u64;

        // NOTE: Saturate instead of wrapping, the clock must stay monotonic
        let _ = self
            .nanos
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                Some(n.saturating_add(delta))
            });
    }

    /// Sets the reading.
    ///
    /// Setting a reading lower than the current one breaks monotonicity;
    /// rolling windows treat a reading in the past as "no time elapsed".
    #[allow(clippy::cast_possible_truncation)]
    pub fn set(&self, duration: Duration) {
        let nanos = duration.as_nanos().min(u128::from(u64::MAX)) as u64;
        self.nanos.store(nanos, Ordering::Release);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::Acquire))
    }
}

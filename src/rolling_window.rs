use crate::{
    agg::{Aggregation, Avg, Count, Fold, Sum},
    builder::Builder,
    window::Window,
    Bucket, Clock, MonotonicClock, Value,
};
use std::{sync::RwLock, time::Duration};

struct State {
    window: Window,

    /// Bucket that was written to last
    offset: usize,

    /// Start time of the bucket at `offset`, aligned to the interval
    last_time: Duration,
}

/// Counts events in a ring of time buckets, each covering one `interval`.
///
/// Buckets that fall out of the window are not cleared by a timer; writes
/// reset them when they catch up with the clock, and reads skip them.
pub struct RollingWindow<C: Clock = MonotonicClock> {
    state: RwLock<State>,
    size: usize,
    interval: Duration,
    ignore_current: bool,
    clock: C,
}

impl RollingWindow {
    /// Starts building a rolling window of `size` buckets, each `interval` wide.
    #[must_use]
    pub fn builder(size: usize, interval: Duration) -> Builder {
        Builder::new(size, interval)
    }

    /// Creates a rolling window of `size` buckets, each `interval` wide,
    /// using the default options.
    ///
    /// # Errors
    ///
    /// Returns error if the size is zero, or the interval is zero
    /// or longer than `u64::MAX` nanoseconds.
    pub fn new(size: usize, interval: Duration) -> crate::Result<Self> {
        Self::builder(size, interval).build()
    }
}

impl<C: Clock> RollingWindow<C> {
    pub(crate) fn from_parts(
        size: usize,
        interval: Duration,
        ignore_current: bool,
        clock: C,
    ) -> Self {
        let last_time = clock.now();

        Self {
            state: RwLock::new(State {
                window: Window::new(size),
                offset: 0,
                last_time,
            }),
            size,
            interval,
            ignore_current,
            clock,
        }
    }

    /// Number of buckets.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Width of a single bucket.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether reads skip the bucket that is still open.
    #[must_use]
    pub fn ignores_current(&self) -> bool {
        self.ignore_current
    }

    /// Adds a value to the current bucket.
    ///
    /// Buckets that expired since the last write are reset first.
    pub fn add(&self, value: Value) {
        let mut state = self.state.write().expect("lock is poisoned");
        let now = self.clock.now();

        self.update_offset(&mut state, now);

        let offset = state.offset;
        state.window.add(offset, value);
    }

    /// Calls `f` on every bucket that has not expired yet, oldest first.
    ///
    /// If `ignore_current` is set, the bucket that is still open is skipped
    /// as long as its interval has not ended.
    pub fn reduce<F: FnMut(&Bucket)>(&self, f: F) {
        let state = self.state.read().expect("lock is poisoned");
        let span = self.span(&state, self.clock.now());

        let diff = if span == 0 && self.ignore_current {
            self.size - 1
        } else {
            self.size - span
        };

        if diff == 0 {
            log::trace!("All {} buckets expired, nothing to reduce", self.size);
            return;
        }

        // NOTE: Expired buckets are [offset + 1, offset + span]
        let start = (state.offset + span + 1) % self.size;
        state.window.reduce(start, diff, f);
    }

    /// Folds all valid buckets using the aggregation `A`.
    ///
    /// Returns `None` if no bucket is valid.
    #[must_use]
    pub fn aggregate<A: Aggregation>(&self) -> Option<Value> {
        let mut fold = Fold::<A>::new();
        self.reduce(|bucket| fold.visit(bucket));
        fold.finish()
    }

    /// Sum of all values in the window.
    #[must_use]
    pub fn sum(&self) -> Option<Value> {
        self.aggregate::<Sum>()
    }

    /// Number of values in the window.
    #[must_use]
    pub fn count(&self) -> Option<Value> {
        self.aggregate::<Count>()
    }

    /// Average of all values in the window, `0.0` if the valid buckets are empty.
    #[must_use]
    pub fn avg(&self) -> Option<Value> {
        self.aggregate::<Avg>()
    }

    /// Copies the buckets that [`RollingWindow::reduce`] would visit, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Bucket> {
        let mut buckets = Vec::with_capacity(self.size);
        self.reduce(|bucket| buckets.push(*bucket));
        buckets
    }

    /// Number of whole intervals since the bucket at `offset` started,
    /// clamped to `size`.
    #[allow(clippy::cast_possible_truncation)]
    fn span(&self, state: &State, now: Duration) -> usize {
        let elapsed = now.saturating_sub(state.last_time);
        let intervals = elapsed.as_nanos() / self.interval.as_nanos();

        if intervals < self.size as u128 {
            intervals as usize
        } else {
            self.size
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn update_offset(&self, state: &mut State, now: Duration) {
        let span = self.span(state, now);
        if span == 0 {
            return;
        }

        let offset = state.offset;

        for i in 0..span {
            state.window.reset_bucket((offset + i + 1) % self.size);
        }

        state.offset = (offset + span) % self.size;

        // NOTE: Remainder is smaller than the interval, which fits into u64 nanos
        let elapsed = now.saturating_sub(state.last_time);
        let rem = elapsed.as_nanos() % self.interval.as_nanos();
        state.last_time = now - Duration::from_nanos(rem as u64);

        log::trace!(
            "Advanced {span} buckets, offset {offset} -> {}, bucket start {:?}",
            state.offset,
            state.last_time,
        );
    }
}

use crate::{Clock, Error, MonotonicClock, RollingWindow};
use std::time::Duration;

/// Builder for [`RollingWindow`].
pub struct Builder<C: Clock = MonotonicClock> {
    size: usize,
    interval: Duration,
    ignore_current: bool,
    clock: C,
}

impl Builder {
    pub(crate) fn new(size: usize, interval: Duration) -> Self {
        Self {
            size,
            interval,
            ignore_current: false,
            clock: MonotonicClock::new(),
        }
    }
}

impl<C: Clock> Builder<C> {
    /// If `true`, reads skip the bucket that is still being written to,
    /// as long as its interval has not ended yet.
    ///
    /// Default = false
    #[must_use]
    pub fn ignore_current(mut self, enabled: bool) -> Self {
        self.ignore_current = enabled;
        self
    }

    /// Sets the time source.
    ///
    /// Default = [`MonotonicClock`]
    #[must_use]
    pub fn clock<C2: Clock>(self, clock: C2) -> Builder<C2> {
        Builder {
            size: self.size,
            interval: self.interval,
            ignore_current: self.ignore_current,
            clock,
        }
    }

    /// Creates the rolling window.
    ///
    /// # Errors
    ///
    /// Returns error if the size is zero, or the interval is zero
    /// or longer than `u64::MAX` nanoseconds.
    pub fn build(self) -> crate::Result<RollingWindow<C>> {
        if self.size == 0 {
            return Err(Error::InvalidSize);
        }

        if self.interval.is_zero() || self.interval.as_nanos() > u128::from(u64::MAX) {
            return Err(Error::InvalidInterval);
        }

        log::debug!(
            "Creating rolling window with {} buckets of {:?} (ignore_current={})",
            self.size,
            self.interval,
            self.ignore_current,
        );

        Ok(RollingWindow::from_parts(
            self.size,
            self.interval,
            self.ignore_current,
            self.clock,
        ))
    }
}

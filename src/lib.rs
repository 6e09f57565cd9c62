//! A rolling time-window aggregator.
//!
//! A rolling window is a fixed ring of buckets, each covering one interval of time
//! and accumulating a sum and a hit count. It answers "what happened in the last N intervals"
//! (request counts, error rates, latency sums) without growing in memory and without a
//! background timer: buckets that fall out of the window are reset lazily by the next write,
//! and ignored by reads in the meantime.
//!
//! Writes take an exclusive lock, reads take a shared lock, so a window can be shared
//! across threads as is.
//!
//! ```
//! use rollwin::{agg::Max, RollingWindow};
//! use std::time::Duration;
//!
//! // 10 buckets of 100ms => covers the last second
//! let window = RollingWindow::new(10, Duration::from_millis(100))?;
//!
//! window.add(25.0);
//! window.add(17.0);
//!
//! assert_eq!(Some(42.0), window.sum());
//! assert_eq!(Some(2.0), window.count());
//! assert_eq!(Some(42.0), window.aggregate::<Max>());
//!
//! // Visit the buckets yourself, oldest first
//! window.reduce(|bucket| {
//!     println!("{} values, sum={}", bucket.count, bucket.sum);
//! });
//!
//! # Ok::<(), rollwin::Error>(())
//! ```
//!
//! Time is read from a [`Clock`]. [`MonotonicClock`] is used by default;
//! [`ManualClock`] lets the caller drive time:
//!
//! ```
//! use rollwin::{ManualClock, RollingWindow};
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//!
//! let window = RollingWindow::builder(3, Duration::from_secs(1))
//!     .ignore_current(true)
//!     .clock(clock.clone())
//!     .build()?;
//!
//! window.add(1.0);
//! clock.advance(Duration::from_secs(1));
//! window.add(2.0);
//!
//! // The bucket holding 2.0 is still open, so it is skipped
//! assert_eq!(Some(1.0), window.sum());
//!
//! // After 3 idle seconds, everything is expired
//! clock.advance(Duration::from_secs(3));
//! assert_eq!(None, window.sum());
//!
//! # Ok::<(), rollwin::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs, clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![warn(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![warn(clippy::result_unit_err)]

pub mod agg;
mod bucket;
mod builder;
mod clock;
mod error;
mod rolling_window;
mod window;

pub use bucket::Bucket;
pub use builder::Builder;
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use error::{Error, Result};
pub use rolling_window::RollingWindow;

/// Value accumulated in buckets
pub type Value = f64;

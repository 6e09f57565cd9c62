//! Aggregations over the buckets of a rolling window.
//!
//! Pass one to [`crate::RollingWindow::aggregate`].

mod avg;
mod count;
mod max;
mod min;
mod sum;

pub use avg::Avg;
pub use count::Count;
pub use max::Max;
pub use min::Min;
pub use sum::Sum;

use crate::{Bucket, Value};
use std::marker::PhantomData;

/// Defines how buckets are folded into a single value.
///
/// - `init` turns the oldest visited bucket into the accumulator (default: its sum)
///
/// - `transform` folds each following bucket into the accumulator (default: Add sums)
///
/// - `finish` can transform the result value, given the combined sum and
///   count of all visited buckets (default: Identity)
pub trait Aggregation {
    /// Creates the accumulator from the first visited bucket.
    fn init(bucket: &Bucket) -> Value {
        bucket.sum
    }

    /// Folds the next bucket into the accumulator.
    fn transform(accu: Value, bucket: &Bucket) -> Value {
        accu + bucket.sum
    }

    /// Produces the final value.
    fn finish(accu: Value, _totals: &Bucket) -> Value {
        accu
    }
}

/// Accumulator fed by a reduce visitor
pub(crate) struct Fold<A: Aggregation> {
    accu: Option<Value>,
    totals: Bucket,
    phantom: PhantomData<A>,
}

impl<A: Aggregation> Fold<A> {
    pub fn new() -> Self {
        Self {
            accu: None,
            totals: Bucket::default(),
            phantom: PhantomData,
        }
    }

    pub fn visit(&mut self, bucket: &Bucket) {
        self.accu = Some(match self.accu {
            Some(accu) => A::transform(accu, bucket),
            None => A::init(bucket),
        });

        self.totals.sum += bucket.sum;
        self.totals.count += bucket.count;
    }

    /// Returns `None` if no bucket was visited.
    pub fn finish(self) -> Option<Value> {
        self.accu.map(|accu| A::finish(accu, &self.totals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn bucket(sum: Value, count: u64) -> Bucket {
        Bucket { sum, count }
    }

    fn fold<A: Aggregation>(buckets: &[Bucket]) -> Option<Value> {
        let mut fold = Fold::<A>::new();
        for b in buckets {
            fold.visit(b);
        }
        fold.finish()
    }

    #[test]
    fn agg_empty() {
        assert_eq!(None, fold::<Sum>(&[]));
        assert_eq!(None, fold::<Count>(&[]));
        assert_eq!(None, fold::<Avg>(&[]));
        assert_eq!(None, fold::<Max>(&[]));
        assert_eq!(None, fold::<Min>(&[]));
    }

    #[test]
    fn agg_buckets() {
        let buckets = [bucket(4.0, 2), bucket(0.0, 0), bucket(-1.0, 1), bucket(9.0, 3)];

        assert_eq!(Some(12.0), fold::<Sum>(&buckets));
        assert_eq!(Some(6.0), fold::<Count>(&buckets));
        assert_eq!(Some(2.0), fold::<Avg>(&buckets));
        assert_eq!(Some(9.0), fold::<Max>(&buckets));
        assert_eq!(Some(-1.0), fold::<Min>(&buckets));
    }

    #[test]
    fn agg_avg_no_hits() {
        let buckets = [bucket(0.0, 0), bucket(0.0, 0)];
        assert_eq!(Some(0.0), fold::<Avg>(&buckets));
        assert_eq!(Some(0.0), fold::<Count>(&buckets));
    }
}

use crate::{Bucket, Value};

/// Average of all values in the visited buckets, weighted by hit count
///
/// Evaluates to `0.0` if the visited buckets hold no values.
#[derive(Clone)]
pub struct Avg;

impl super::Aggregation for Avg {
    fn finish(_: Value, totals: &Bucket) -> Value {
        totals.avg()
    }
}

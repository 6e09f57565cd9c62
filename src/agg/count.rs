use crate::{Bucket, Value};

/// Number of values in the visited buckets
#[derive(Clone)]
pub struct Count;

impl super::Aggregation for Count {
    #[allow(clippy::cast_precision_loss)]
    fn init(bucket: &Bucket) -> Value {
        bucket.count as Value
    }

    #[allow(clippy::cast_precision_loss)]
    fn transform(accu: Value, bucket: &Bucket) -> Value {
        accu + bucket.count as Value
    }
}

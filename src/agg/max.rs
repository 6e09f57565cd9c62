/// Largest bucket sum
#[derive(Clone)]
pub struct Max;

impl super::Aggregation for Max {
    fn transform(accu: crate::Value, bucket: &crate::Bucket) -> crate::Value {
        accu.max(bucket.sum)
    }
}

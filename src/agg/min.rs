/// Smallest bucket sum
#[derive(Clone)]
pub struct Min;

impl super::Aggregation for Min {
    fn transform(accu: crate::Value, bucket: &crate::Bucket) -> crate::Value {
        accu.min(bucket.sum)
    }
}

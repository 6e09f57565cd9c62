/// Sum of all values in the visited buckets
#[derive(Clone)]
pub struct Sum;

impl super::Aggregation for Sum {}

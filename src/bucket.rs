use crate::Value;

/// Accumulator for one bucket interval.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bucket {
    /// Sum of all values added since the last reset
    pub sum: Value,

    /// Number of values added since the last reset
    pub count: u64,
}

impl Bucket {
    pub(crate) fn add(&mut self, value: Value) {
        self.sum += value;
        self.count += 1;
    }

    pub(crate) fn reset(&mut self) {
        self.sum = 0.0;
        self.count = 0;
    }

    /// Average of the values in this bucket, `0.0` if the bucket is empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn avg(&self) -> Value {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as Value
        }
    }

    /// Returns `true` if nothing was added since the last reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

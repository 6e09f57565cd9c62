use crate::{Bucket, Value};

/// Fixed ring of buckets, addressed by circular offset.
///
/// The window has no notion of time; offsets are computed by [`crate::RollingWindow`].
pub struct Window {
    buckets: Box<[Bucket]>,
}

impl Window {
    /// Allocates `size` empty buckets.
    ///
    /// `size` must be at least 1.
    pub fn new(size: usize) -> Self {
        debug_assert!(size > 0, "window needs at least one bucket");

        Self {
            buckets: vec![Bucket::default(); size].into_boxed_slice(),
        }
    }

    pub fn size(&self) -> usize {
        self.buckets.len()
    }

    #[allow(clippy::indexing_slicing)]
    pub fn add(&mut self, offset: usize, value: Value) {
        self.buckets[offset].add(value);
    }

    #[allow(clippy::indexing_slicing)]
    pub fn reset_bucket(&mut self, offset: usize) {
        self.buckets[offset].reset();
    }

    /// Visits `count` buckets starting at `start`, wrapping around the end.
    #[allow(clippy::indexing_slicing)]
    pub fn reduce<F: FnMut(&Bucket)>(&self, start: usize, count: usize, mut f: F) {
        debug_assert!(count <= self.size());

        let size = self.size();

        for i in 0..count {
            f(&self.buckets[(start + i) % size]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn sums(window: &Window, start: usize, count: usize) -> Vec<Value> {
        let mut v = vec![];
        window.reduce(start, count, |b| v.push(b.sum));
        v
    }

    #[test]
    fn window_add() {
        let mut window = Window::new(3);
        window.add(0, 1.0);
        window.add(1, 2.0);
        window.add(2, 3.0);
        window.add(1, 2.0);

        assert_eq!(vec![1.0, 4.0, 3.0], sums(&window, 0, 3));
    }

    #[test]
    fn window_reset_bucket() {
        let mut window = Window::new(3);
        window.add(0, 1.0);
        window.add(1, 2.0);
        window.reset_bucket(1);

        assert_eq!(vec![1.0, 0.0, 0.0], sums(&window, 0, 3));
    }

    #[test]
    fn window_reduce_wraps() {
        let mut window = Window::new(4);
        for (idx, value) in [10.0, 20.0, 30.0, 40.0].into_iter().enumerate() {
            window.add(idx, value);
        }

        assert_eq!(vec![30.0, 40.0, 10.0], sums(&window, 2, 3));
        assert_eq!(vec![40.0, 10.0, 20.0, 30.0], sums(&window, 3, 4));
        assert!(sums(&window, 1, 0).is_empty());
    }

    #[test]
    fn window_single_bucket() {
        let mut window = Window::new(1);
        window.add(0, 5.0);

        assert_eq!(1, window.size());
        assert_eq!(vec![5.0], sums(&window, 0, 1));
    }
}

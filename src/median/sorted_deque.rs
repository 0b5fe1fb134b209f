use alloc::collections::VecDeque;
use alloc::vec::Vec;

use super::{cmp_samples, keep_odd, MedianIndexing, MovingMedian};
use crate::history::HistoryBuffer;

/// Incremental moving median over a persistently sorted `VecDeque`.
///
/// Same algorithm as [`SortedVecMedian`](super::SortedVecMedian), down to the
/// median-indexing and leftmost-equal duplicate conventions; only the pool
/// container differs. A deque shifts whichever side of the insertion point is
/// shorter, so updates landing near either end of the sorted window move
/// fewer elements than the array variant's one-sided shift. The two exist
/// side by side to measure exactly that container delta.
pub struct SortedDequeMedian<T> {
    history: HistoryBuffer<T>,
    pool: VecDeque<T>,
    mid: usize,
}

impl<T: Copy + PartialOrd> SortedDequeMedian<T> {
    /// Creates a filter with [`MedianIndexing::Centered`].
    ///
    /// Even `window_size` is rounded up to the next odd value.
    ///
    /// # Panics
    ///
    /// Panics if `window_size < 3`.
    #[must_use]
    pub fn new(window_size: usize) -> Self {
        Self::with_indexing(window_size, MedianIndexing::default())
    }

    /// Creates a filter with an explicit median-indexing policy.
    #[must_use]
    pub fn with_indexing(window_size: usize, indexing: MedianIndexing) -> Self {
        assert!(window_size >= 3, "window size must be at least 3");
        let window_size = keep_odd(window_size);
        Self {
            history: HistoryBuffer::new(window_size),
            pool: VecDeque::with_capacity(window_size),
            mid: indexing.index(window_size),
        }
    }
}

impl<T: Copy + PartialOrd> MovingMedian<T> for SortedDequeMedian<T> {
    fn filter(&mut self, input: &[T]) -> Vec<T> {
        assert!(!input.is_empty(), "input must not be empty");

        self.history.reset(input[0]);
        self.pool.clear();
        self.pool.resize(self.history.capacity(), input[0]);

        let mut out = Vec::with_capacity(input.len());
        let mut oldest = 0;
        for &x in input {
            let leaving = self.history.get(oldest);
            let remove_at = self
                .pool
                .partition_point(|v| cmp_samples(v, &leaving).is_lt());
            let _ = self.pool.remove(remove_at);

            let insert_at = self.pool.partition_point(|v| cmp_samples(v, &x).is_lt());
            self.pool.insert(insert_at, x);

            oldest = self.history.write(x);
            out.push(self.pool[self.mid]);
        }
        out
    }

    fn window_size(&self) -> usize {
        self.history.capacity()
    }
}

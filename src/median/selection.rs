use alloc::vec::Vec;

use super::{cmp_samples, keep_odd, MedianIndexing, MovingMedian};
use crate::history::HistoryBuffer;

/// Moving median by partial selection over a fresh copy of the window.
///
/// Every sample, the entire history is copied into a scratch pool and the
/// median index is found with `select_nth_unstable_by` (an nth-element
/// partial sort, O(W) average). Nothing carries over between steps, so
/// correctness never depends on incremental bookkeeping — this is the
/// reference strategy the sorted variants are checked against, and the
/// slowest of the three.
///
/// # Example
///
/// ```
/// use rollmed::{MovingMedian, SelectionMedian};
///
/// let mut filter = SelectionMedian::new(3);
/// let out = filter.filter(&[5.0, 1.0, 4.0, 2.0, 8.0]);
/// assert_eq!(out, [5.0, 5.0, 4.0, 2.0, 4.0]);
/// ```
///
/// # Panics
///
/// Construction panics if `window_size < 3`; [`filter`](MovingMedian::filter)
/// panics on empty input.
pub struct SelectionMedian<T> {
    history: HistoryBuffer<T>,
    pool: Vec<T>,
    mid: usize,
}

impl<T: Copy + PartialOrd> SelectionMedian<T> {
    /// Creates a filter with [`MedianIndexing::Centered`].
    ///
    /// Even `window_size` is rounded up to the next odd value.
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
            pool: Vec::with_capacity(window_size),
            mid: indexing.index(window_size),
        }
    }
}

impl<T: Copy + PartialOrd> MovingMedian<T> for SelectionMedian<T> {
    fn filter(&mut self, input: &[T]) -> Vec<T> {
        assert!(!input.is_empty(), "input must not be empty");

        self.history.reset(input[0]);

        let mut out = Vec::with_capacity(input.len());
        for &x in input {
            self.history.write(x);

            // Rebuild the pool from scratch; slot order is irrelevant to
            // selection.
            self.pool.clear();
            self.pool.extend_from_slice(self.history.as_slice());

            let (_, median, _) = self
                .pool
                .select_nth_unstable_by(self.mid, |a, b| cmp_samples(a, b));
            out.push(*median);
        }
        out
    }

    fn window_size(&self) -> usize {
        self.history.capacity()
    }
}

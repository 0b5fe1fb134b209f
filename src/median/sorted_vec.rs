use alloc::vec::Vec;

use super::{cmp_samples, keep_odd, MedianIndexing, MovingMedian};
use crate::history::HistoryBuffer;

/// Incremental moving median over a persistently sorted contiguous array.
///
/// The pool holds the current window in ascending order at all times. Each
/// sample, the value leaving the window (the history slot about to be
/// overwritten) is removed via lower-bound search and the new sample is
/// inserted the same way, so the median is a plain index read. Removal picks
/// the leftmost element equal to the leaving value; with duplicates that may
/// not be the same physical sample, which is immaterial since the values are
/// equal.
///
/// Searches are O(log W) but `Vec` insert/remove shift O(W) elements, so a
/// step is still O(W) — just with a smaller constant than copying and
/// re-selecting the whole window.
///
/// # Example
///
/// ```
/// use rollmed::{MovingMedian, SortedVecMedian};
///
/// let mut filter = SortedVecMedian::new(3);
/// let out = filter.filter(&[5.0, 1.0, 4.0, 2.0, 8.0]);
/// assert_eq!(out, [5.0, 5.0, 4.0, 2.0, 4.0]);
/// ```
///
/// # Panics
///
/// Construction panics if `window_size < 3`; [`filter`](MovingMedian::filter)
/// panics on empty input.
pub struct SortedVecMedian<T> {
    history: HistoryBuffer<T>,
    pool: Vec<T>,
    mid: usize,
}

impl<T: Copy + PartialOrd> SortedVecMedian<T> {
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

impl<T: Copy + PartialOrd> MovingMedian<T> for SortedVecMedian<T> {
    fn filter(&mut self, input: &[T]) -> Vec<T> {
        assert!(!input.is_empty(), "input must not be empty");

        self.history.reset(input[0]);
        self.pool.clear();
        self.pool.resize(self.history.capacity(), input[0]);

        let mut out = Vec::with_capacity(input.len());
        let mut oldest = 0;
        for &x in input {
            // Drop the value leaving the window. Its slot is the one the
            // upcoming write overwrites, so read it first.
            let leaving = self.history.get(oldest);
            let remove_at = self
                .pool
                .partition_point(|v| cmp_samples(v, &leaving).is_lt());
            self.pool.remove(remove_at);

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

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn golden_sequence_window3() {
        let mut filter = SortedVecMedian::new(3);
        let out = filter.filter(&[5, 1, 4, 2, 8]);
        assert_eq!(out, [5, 5, 4, 2, 4]);
    }

    #[test]
    fn golden_sequence_upper_biased() {
        let mut filter = SortedVecMedian::with_indexing(3, MedianIndexing::UpperBiased);
        let out = filter.filter(&[5, 1, 4, 2, 8]);
        assert_eq!(out, [5, 5, 5, 4, 8]);
    }

    #[test]
    fn matches_selection_on_descending_run() {
        let input: Vec<i32> = (0..64).rev().collect();
        let mut sorted = SortedVecMedian::new(9);
        let mut reference = super::super::SelectionMedian::new(9);
        assert_eq!(sorted.filter(&input), reference.filter(&input));
    }

    #[test]
    fn duplicates_do_not_corrupt_the_pool() {
        // Long runs of equal values exercise the leftmost-equal removal.
        let input = [2i32, 2, 2, 5, 2, 2, 9, 2, 2, 2, 1, 2];
        let mut sorted = SortedVecMedian::new(5);
        let mut reference = super::super::SelectionMedian::new(5);
        assert_eq!(sorted.filter(&input), reference.filter(&input));
    }

    #[test]
    fn constant_input_is_passed_through() {
        let mut filter = SortedVecMedian::new(9);
        let out = filter.filter(&[-1.5f64; 30]);
        assert_eq!(out, [-1.5f64; 30]);
    }

    #[test]
    fn repeated_calls_are_independent() {
        let mut filter = SortedVecMedian::new(3);
        let input = [8i16, 6, 7, 5, 3, 0, 9];
        let first = filter.filter(&input);
        let second = filter.filter(&input);
        assert_eq!(first, second);
    }

    #[test]
    fn single_sample_input() {
        let mut filter = SortedVecMedian::new(3);
        assert_eq!(filter.filter(&[42i32]), [42]);
    }

    #[test]
    #[should_panic(expected = "window size must be at least 3")]
    fn tiny_window_is_rejected() {
        let _ = SortedVecMedian::<i32>::new(1);
    }

    #[test]
    #[should_panic(expected = "input must not be empty")]
    fn empty_input_is_rejected() {
        let mut filter = SortedVecMedian::<i32>::new(3);
        let _ = filter.filter(&[]);
    }
}

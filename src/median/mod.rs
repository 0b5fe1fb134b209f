//! Moving-median filters over a fixed odd-length sliding window.
//!
//! Three strategies share one contract ([`MovingMedian`]): given the full
//! input sequence, emit the window median after every sample, with the window
//! pre-filled from the first sample so the output has the same length as the
//! input.
//!
//! - [`SelectionMedian`] recomputes the median from scratch each step by
//!   partial selection over a copy of the window.
//! - [`SortedVecMedian`] and [`SortedDequeMedian`] keep the window sorted at
//!   all times and update it by lower-bound remove/insert, differing only in
//!   the backing container.
//!
//! Window sizes are normalized by [`keep_odd`] so a unique middle index
//! exists; which sorted index is reported is governed by [`MedianIndexing`].

mod selection;
mod sorted_deque;
mod sorted_vec;

pub use selection::SelectionMedian;
pub use sorted_deque::SortedDequeMedian;
pub use sorted_vec::SortedVecMedian;

use alloc::vec::Vec;
use core::cmp::Ordering;

/// Rounds an even window size up to the next odd value.
///
/// Odd-only windows guarantee a unique middle element, so the median is
/// always an actual sample rather than an interpolation.
///
/// # Example
///
/// ```
/// use rollmed::keep_odd;
///
/// assert_eq!(keep_odd(4), 5);
/// assert_eq!(keep_odd(5), 5);
/// ```
#[must_use]
pub const fn keep_odd(n: usize) -> usize {
    if n % 2 == 0 {
        n + 1
    } else {
        n
    }
}

/// Which position of the ascending-sorted window is reported as the median.
///
/// All three filters accept the same policy via their `with_indexing`
/// constructors, so the conventions can be cross-validated against each
/// other; the plain `new` constructors use [`Centered`](Self::Centered).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MedianIndexing {
    /// Index `W / 2`, the true zero-based middle of an odd-length window.
    #[default]
    Centered,
    /// Index `W / 2 + 1`, one position above center. A biased estimator kept
    /// selectable for comparison against data produced under that
    /// convention.
    UpperBiased,
}

impl MedianIndexing {
    /// Zero-based sorted-window index read as the median. Always in range
    /// for odd `window_size >= 3`.
    pub(crate) const fn index(self, window_size: usize) -> usize {
        match self {
            Self::Centered => window_size / 2,
            Self::UpperBiased => window_size / 2 + 1,
        }
    }
}

/// Common capability of the moving-median filters.
///
/// Object-safe, so a caller sweeping (strategy, window size) pairs can hold
/// each instance behind `&mut dyn MovingMedian<T>`.
pub trait MovingMedian<T> {
    /// Filters `input`, producing one median per input sample.
    ///
    /// Internal state is re-initialized from `input[0]` at the start of every
    /// call, so repeated calls on one instance are independent and the
    /// pre-sized internal buffers are reused without reallocation.
    ///
    /// # Panics
    ///
    /// Panics if `input` is empty.
    fn filter(&mut self, input: &[T]) -> Vec<T>;

    /// The normalized (odd) window size.
    fn window_size(&self) -> usize;
}

/// Sample comparison used by every filter. NaN compares as equal, which keeps
/// selection and search total without panicking; its position in the window
/// is unspecified.
pub(crate) fn cmp_samples<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

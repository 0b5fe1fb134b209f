#![no_std]

//! Streaming moving-median filters over a fixed odd-sized sliding window.
//!
//! Each filter consumes a full input sequence and produces one median per
//! input sample, computed over the last `W` samples (the window is pre-filled
//! with the first sample, so output and input always have the same length).
//! Three algorithmically distinct update strategies share one contract:
//!
//! - [`SelectionMedian`] — partial selection over a fresh copy of the window
//!   each step. O(W) per sample, no ordering bookkeeping to get wrong.
//! - [`SortedVecMedian`] — keeps the window sorted in a contiguous array,
//!   updated by lower-bound remove/insert. O(W) shifting, O(log W) search.
//! - [`SortedDequeMedian`] — same algorithm over a double-ended queue, which
//!   moves the shorter side on insert/remove near either end.
//!
//! All three implement [`MovingMedian`], so callers can hold them behind
//! `&mut dyn MovingMedian<T>` and swap strategies without code changes.
//!
//! # Example
//!
//! ```
//! use rollmed::{MovingMedian, SortedVecMedian};
//!
//! let mut filter = SortedVecMedian::new(3);
//!
//! // Impulse spike at index 2 is rejected by the median.
//! let out = filter.filter(&[10.0, 10.0, 100.0, 10.0, 10.0]);
//! assert_eq!(out, [10.0, 10.0, 10.0, 10.0, 10.0]);
//! ```
//!
//! # No-std
//!
//! The crate is `no_std` with `alloc`: internal buffers are sized once at
//! construction from the runtime window size and reused across `filter`
//! calls; only the output vector is allocated per call.

extern crate alloc;

mod history;
mod median;

pub use history::HistoryBuffer;
pub use median::{
    keep_odd, MedianIndexing, MovingMedian, SelectionMedian, SortedDequeMedian, SortedVecMedian,
};

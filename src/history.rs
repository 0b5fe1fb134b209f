use alloc::vec::Vec;

/// Fixed-capacity circular buffer holding the most recent raw input samples.
///
/// All write-pointer wraparound arithmetic lives here so the filters sharing
/// the buffer cannot drift apart on off-by-one details. The buffer starts
/// logically empty; [`reset`](Self::reset) materializes the slots, so no
/// default-value semantics of the sample type are relied on.
///
/// # Example
///
/// ```
/// use rollmed::HistoryBuffer;
///
/// let mut history: HistoryBuffer<f32> = HistoryBuffer::new(3);
/// history.reset(1.0);
///
/// // `write` returns the slot the next write will overwrite, i.e. where
/// // the oldest remaining sample lives.
/// let oldest = history.write(2.0);
/// assert_eq!(oldest, 1);
/// assert_eq!(history.get(oldest), 1.0);
/// ```
pub struct HistoryBuffer<T> {
    slots: Vec<T>,
    capacity: usize,
    head: usize,
}

impl<T: Copy> HistoryBuffer<T> {
    /// Creates an empty buffer with room for `capacity` samples.
    ///
    /// The slot storage is allocated here and never reallocated afterwards.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            head: 0,
        }
    }

    /// Overwrites every slot with `fill` and rewinds the write pointer to 0.
    ///
    /// Must be called once before the first [`write`](Self::write); called
    /// again, it discards all recorded samples without reallocating.
    pub fn reset(&mut self, fill: T) {
        self.slots.clear();
        self.slots.resize(self.capacity, fill);
        self.head = 0;
    }

    /// Stores `value` at the write pointer and advances it one slot, wrapping
    /// at capacity.
    ///
    /// Returns the index of the slot the *next* write will overwrite. That
    /// slot holds the oldest sample still in the window, which is exactly the
    /// value an incremental filter must drop from its working set before the
    /// overwrite happens.
    ///
    /// # Panics
    ///
    /// Panics if the buffer has not been [`reset`](Self::reset) yet.
    pub fn write(&mut self, value: T) -> usize {
        self.slots[self.head] = value;
        self.head = (self.head + 1) % self.capacity;
        self.head
    }

    /// Returns the sample stored at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity` or the buffer has not been reset.
    #[must_use]
    pub fn get(&self, index: usize) -> T {
        self.slots[index]
    }

    /// All slots in storage order (not arrival order). Empty until the first
    /// [`reset`](Self::reset).
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Number of slots.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

//! Bounded sliding window of derived readings
//!
//! Backs the time-series chart: a fixed-capacity, insertion-ordered history
//! with strict FIFO eviction. Evicting whole readings (rather than parallel
//! per-series arrays) keeps temperature, humidity and heat-index series
//! index-aligned for the chart by construction.

use crate::core_types::reading::DerivedReading;
use std::collections::VecDeque;

/// Number of readings the dashboard chart displays
pub const DEFAULT_CAPACITY: usize = 20;

/// Fixed-capacity FIFO history of derived readings
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    readings: VecDeque<DerivedReading>,
    capacity: usize,
}

impl SlidingWindow {
    /// Create a window holding at most `capacity` readings (minimum 1)
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        SlidingWindow {
            readings: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a reading, evicting the oldest when the window is full.
    ///
    /// O(1) amortized and total: every push succeeds.
    pub fn push(&mut self, reading: DerivedReading) {
        if self.readings.len() == self.capacity {
            self.readings.pop_front();
        }
        self.readings.push_back(reading);
    }

    /// Readings in arrival order, oldest first
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, DerivedReading> {
        self.readings.iter()
    }

    /// Most recently appended reading, if any
    #[must_use]
    pub fn latest(&self) -> Option<&DerivedReading> {
        self.readings.back()
    }

    /// Number of readings currently held (always <= capacity)
    #[must_use]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// True until the first reading arrives
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Configured capacity
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<'a> IntoIterator for &'a SlidingWindow {
    type Item = &'a DerivedReading;
    type IntoIter = std::collections::vec_deque::Iter<'a, DerivedReading>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Default for SlidingWindow {
    fn default() -> Self {
        SlidingWindow::new(DEFAULT_CAPACITY)
    }
}

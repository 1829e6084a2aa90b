// src/processing/windowing.rs
//! Bounded FIFO of filtered channel rows for feature extraction

use std::collections::VecDeque;

/// Sliding window over the most recent filtered frames.
///
/// Owned by the feature-extraction driver, not by the processor or the
/// extractor: the pipeline stays stateless apart from filter memory, and
/// the driver decides the window length (10 rows is 200 ms at 50 Hz).
/// Pushing past capacity evicts the oldest row.
#[derive(Debug, Clone)]
pub struct FrameWindow {
    rows: VecDeque<Vec<f32>>,
    capacity: usize,
}

impl FrameWindow {
    /// Create a window holding at most `capacity` rows.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "window capacity must be non-zero");
        Self {
            rows: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append the channel row of a filtered frame, evicting the oldest row
    /// once the window is full.
    pub fn push(&mut self, channels: Vec<f32>) {
        if self.rows.len() == self.capacity {
            self.rows.pop_front();
        }
        self.rows.push_back(channels);
    }

    /// The buffered rows, oldest first.
    ///
    /// Takes `&mut self` because the ring storage may need to be made
    /// contiguous before it can be viewed as one slice.
    pub fn rows(&mut self) -> &[Vec<f32>] {
        self.rows.make_contiguous()
    }

    /// Number of rows currently buffered.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the window holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Maximum number of rows retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all buffered rows, e.g. on stream disconnect.
    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

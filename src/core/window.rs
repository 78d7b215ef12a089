//! Bounded FIFO window over recent observations.

use std::collections::VecDeque;

/// A bounded FIFO of the most recent observations.
///
/// Appending beyond capacity evicts the oldest value, so the buffer never
/// holds more than `capacity` observations. Aggregates (mean, variance) are
/// computed over exactly the values currently held — fewer than `capacity`
/// during warm-up.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    values: VecDeque<f64>,
    capacity: usize,
}

impl HistoryBuffer {
    /// Create a buffer holding at most `capacity` observations.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity >= 1, "HistoryBuffer capacity must be >= 1");
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a value, evicting the oldest when the window is full.
    pub fn push(&mut self, value: f64) {
        self.values.push_back(value);
        if self.values.len() > self.capacity {
            self.values.pop_front();
        }
    }

    /// Number of observations currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Maximum number of observations held.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest observation currently held.
    #[inline]
    pub fn front(&self) -> Option<f64> {
        self.values.front().copied()
    }

    /// Iterator over current contents, oldest first.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Arithmetic mean of the current contents (0.0 when empty).
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Population variance of the current contents.
    ///
    /// The divisor is the current length, never the configured capacity, so
    /// early-period variance is taken over the available window only.
    pub fn variance(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let mean = self.mean();
        self.values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / self.values.len() as f64
    }

    /// Population standard deviation of the current contents.
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}

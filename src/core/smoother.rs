//! Exponential smoothing recurrence with explicit seed state.

/// Stateful EMA recurrence.
///
/// The smoothing constant is derived from the period as `k = 2 / (period + 1)`.
/// The first observation seeds the EMA exactly (no recurrence applied); every
/// later observation applies `ema += (price - ema) * k`.
///
/// Seeding with the raw first price biases early outputs toward it. That is
/// the convention these indicators follow, so it is reproduced here rather
/// than seeding with an initial SMA.
///
/// The uninitialized state is tracked with an `Option`, not a zero sentinel:
/// a legitimate price of exactly 0.0 must not read as "no observation yet".
#[derive(Debug, Clone)]
pub struct ExpSmoother {
    k: f64,
    ema: Option<f64>,
}

impl ExpSmoother {
    /// Create a smoother for the given period (must be >= 1).
    pub fn new(period: usize) -> Self {
        debug_assert!(period >= 1, "ExpSmoother period must be >= 1");
        Self {
            k: 2.0 / (period as f64 + 1.0),
            ema: None,
        }
    }

    /// Consume one observation and return the current EMA.
    pub fn update(&mut self, price: f64) -> f64 {
        let next = match self.ema {
            None => price,
            Some(prev) => (price - prev) * self.k + prev,
        };
        self.ema = Some(next);
        next
    }

    /// Current EMA, or `None` before the first observation.
    #[inline]
    pub fn value(&self) -> Option<f64> {
        self.ema
    }

    /// Smoothing constant `k = 2 / (period + 1)`.
    #[inline]
    pub fn smoothing_constant(&self) -> f64 {
        self.k
    }
}

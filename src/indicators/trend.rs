//! Trend indicators: SMA, EMA.

use crate::core::error::TalonError;
use crate::core::smoother::ExpSmoother;
use crate::core::types::EmaParams;
use crate::core::window::HistoryBuffer;
use crate::core::Result;

/// Simple Moving Average.
///
/// The mean is taken over however much of the trailing window exists so far,
/// so every input produces an output from the very first observation.
///
/// # Arguments
/// * `data` - Price data
/// * `period` - Lookback period
///
/// # Returns
/// Vector of SMA values, same length as the input
pub fn sma(data: &[f64], period: usize) -> Result<Vec<f64>> {
    if period == 0 {
        return Err(TalonError::invalid_parameter("SMA period must be > 0"));
    }

    let mut window = HistoryBuffer::new(period);
    let mut result = Vec::with_capacity(data.len());

    for &price in data {
        window.push(price);
        result.push(window.mean());
    }

    Ok(result)
}

/// Exponential Moving Average.
///
/// The first observation seeds the EMA exactly; every later observation
/// applies the recurrence `ema += (price - ema) * k` with `k = 2 / (period + 1)`.
///
/// # Arguments
/// * `data` - Price data
/// * `period` - Lookback period (used to derive the smoothing constant)
///
/// # Returns
/// Vector of EMA values, same length as the input
pub fn ema(data: &[f64], period: usize) -> Result<Vec<f64>> {
    if period == 0 {
        return Err(TalonError::invalid_parameter("EMA period must be > 0"));
    }

    let mut smoother = ExpSmoother::new(period);
    Ok(data.iter().map(|&price| smoother.update(price)).collect())
}

impl EmaParams {
    /// Run the EMA with these parameters.
    pub fn compute(&self, data: &[f64]) -> Result<Vec<f64>> {
        ema(data, self.period)
    }
}

//! Volatility indicators: rolling standard deviation, Bollinger Bands.

use crate::core::error::TalonError;
use crate::core::types::{BollingerParams, StdDevParams};
use crate::core::window::HistoryBuffer;
use crate::core::Result;

/// Rolling standard deviation result.
#[derive(Debug, Clone)]
pub struct StdDevResult {
    /// Simple moving average of the trailing window.
    pub sma: Vec<f64>,
    /// Population standard deviation of the trailing window.
    pub std_dev: Vec<f64>,
}

/// Rolling standard deviation over a trailing window.
///
/// Variance is population variance with the divisor equal to the number of
/// observations currently in the window, not the configured period — early
/// values are taken over the partial window only.
///
/// # Arguments
/// * `data` - Price data
/// * `period` - Lookback period (default: 20)
///
/// # Returns
/// StdDevResult with the window SMA and standard deviation series
pub fn rolling_std_dev(data: &[f64], period: usize) -> Result<StdDevResult> {
    if period == 0 {
        return Err(TalonError::invalid_parameter("Std-dev period must be > 0"));
    }

    let mut window = HistoryBuffer::new(period);
    let n = data.len();
    let mut sma = Vec::with_capacity(n);
    let mut std_dev = Vec::with_capacity(n);

    for &price in data {
        window.push(price);
        sma.push(window.mean());
        std_dev.push(window.std_dev());
    }

    Ok(StdDevResult { sma, std_dev })
}

/// Bollinger Bands result.
#[derive(Debug, Clone)]
pub struct BollingerBandsResult {
    /// Middle band (window SMA).
    pub middle: Vec<f64>,
    /// Upper band (middle + stdev_factor * std_dev).
    pub upper: Vec<f64>,
    /// Lower band (middle - stdev_factor * std_dev).
    pub lower: Vec<f64>,
}

/// Bollinger Bands.
///
/// # Arguments
/// * `data` - Price data
/// * `period` - Lookback period for the middle band SMA (default: 20)
/// * `stdev_factor` - Standard deviation scaling factor (default: 2.0)
///
/// # Returns
/// BollingerBandsResult with middle, upper, and lower band series
pub fn bollinger_bands(data: &[f64], period: usize, stdev_factor: f64) -> Result<BollingerBandsResult> {
    if period == 0 {
        return Err(TalonError::invalid_parameter("Bollinger Bands period must be > 0"));
    }
    if !stdev_factor.is_finite() || stdev_factor < 0.0 {
        return Err(TalonError::invalid_parameter(
            "Bollinger Bands stdev_factor must be finite and non-negative",
        ));
    }

    let mut window = HistoryBuffer::new(period);
    let n = data.len();
    let mut middle = Vec::with_capacity(n);
    let mut upper = Vec::with_capacity(n);
    let mut lower = Vec::with_capacity(n);

    for &price in data {
        window.push(price);
        let mean = window.mean();
        let stdev = window.std_dev();
        middle.push(mean);
        upper.push(mean + stdev_factor * stdev);
        lower.push(mean - stdev_factor * stdev);
    }

    Ok(BollingerBandsResult { middle, upper, lower })
}

impl StdDevParams {
    /// Run the rolling standard deviation with these parameters.
    pub fn compute(&self, data: &[f64]) -> Result<StdDevResult> {
        rolling_std_dev(data, self.period)
    }
}

impl BollingerParams {
    /// Run Bollinger Bands with these parameters.
    pub fn compute(&self, data: &[f64]) -> Result<BollingerBandsResult> {
        bollinger_bands(data, self.period, self.stdev_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_dev_partial_window() {
        let data = vec![1.0, 3.0, 5.0];
        let result = rolling_std_dev(&data, 5).unwrap();
        // Single observation: variance 0
        assert!(result.std_dev[0].abs() < 1e-10);
        // Two observations, mean 2, population variance 1
        assert!((result.sma[1] - 2.0).abs() < 1e-10);
        assert!((result.std_dev[1] - 1.0).abs() < 1e-10);
        // Three observations, mean 3, variance (4+0+4)/3
        assert!((result.sma[2] - 3.0).abs() < 1e-10);
        assert!((result.std_dev[2] - (8.0f64 / 3.0).sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_std_dev_constant_input_is_zero() {
        let data = vec![9.0; 40];
        let result = rolling_std_dev(&data, 20).unwrap();
        assert!(result.std_dev.iter().all(|v| v.abs() < 1e-10));
        assert!(result.sma.iter().all(|v| (v - 9.0).abs() < 1e-10));
    }

    #[test]
    fn test_bollinger_band_symmetry() {
        let data: Vec<f64> = (1..=40).map(|x| x as f64 + (x as f64 * 0.4).sin() * 3.0).collect();
        let sd = rolling_std_dev(&data, 20).unwrap();
        let bands = bollinger_bands(&data, 20, 2.0).unwrap();

        for i in 0..data.len() {
            assert!((bands.middle[i] - sd.sma[i]).abs() < 1e-10);
            assert!((bands.upper[i] - bands.middle[i] - 2.0 * sd.std_dev[i]).abs() < 1e-10);
            assert!((bands.middle[i] - bands.lower[i] - 2.0 * sd.std_dev[i]).abs() < 1e-10);
        }
    }

    #[test]
    fn test_bollinger_zero_factor_collapses_bands() {
        let data = vec![10.0, 14.0, 12.0, 11.0];
        let bands = bollinger_bands(&data, 3, 0.0).unwrap();
        for i in 0..data.len() {
            assert!((bands.upper[i] - bands.middle[i]).abs() < 1e-10);
            assert!((bands.lower[i] - bands.middle[i]).abs() < 1e-10);
        }
    }

    #[test]
    fn test_invalid_parameters() {
        let data = vec![1.0, 2.0, 3.0];
        assert!(rolling_std_dev(&data, 0).is_err());
        assert!(bollinger_bands(&data, 0, 2.0).is_err());
        assert!(bollinger_bands(&data, 3, -1.0).is_err());
        assert!(bollinger_bands(&data, 3, f64::NAN).is_err());
        assert!(bollinger_bands(&data, 3, f64::INFINITY).is_err());
    }

    #[test]
    fn test_empty_input() {
        let result = rolling_std_dev(&[], 5).unwrap();
        assert!(result.sma.is_empty() && result.std_dev.is_empty());
        let bands = bollinger_bands(&[], 5, 2.0).unwrap();
        assert!(bands.middle.is_empty() && bands.upper.is_empty() && bands.lower.is_empty());
    }

    #[test]
    fn test_params_compute() {
        let data: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let sd = StdDevParams::default().compute(&data).unwrap();
        assert_eq!(sd.std_dev.len(), 30);
        let bands = BollingerParams::default().compute(&data).unwrap();
        assert_eq!(bands.upper.len(), 30);
    }
}

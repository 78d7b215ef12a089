//! Core data types for Talon.

use serde::{Deserialize, Serialize};

/// Type alias for price values.
pub type Price = f64;

/// Type alias for timestamp values (nanoseconds since epoch).
pub type Timestamp = i64;

/// EMA parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmaParams {
    /// Number of periods over which to average.
    pub period: usize,
}

impl Default for EmaParams {
    fn default() -> Self {
        Self { period: 20 }
    }
}

/// Momentum parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentumParams {
    /// How far to look back for the reference price.
    pub period: usize,
}

impl Default for MomentumParams {
    fn default() -> Self {
        Self { period: 20 }
    }
}

/// APO parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApoParams {
    /// Fast EMA period.
    pub fast_period: usize,
    /// Slow EMA period.
    pub slow_period: usize,
}

impl Default for ApoParams {
    fn default() -> Self {
        Self {
            fast_period: 10,
            slow_period: 40,
        }
    }
}

/// MACD parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdParams {
    /// Fast EMA period.
    pub fast_period: usize,
    /// Slow EMA period.
    pub slow_period: usize,
    /// Signal line EMA period.
    pub signal_period: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

/// RSI parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiParams {
    /// Look-back period for gain/loss averaging.
    pub period: usize,
}

impl Default for RsiParams {
    fn default() -> Self {
        Self { period: 20 }
    }
}

/// Rolling standard deviation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StdDevParams {
    /// Look-back period.
    pub period: usize,
}

impl Default for StdDevParams {
    fn default() -> Self {
        Self { period: 20 }
    }
}

/// Bollinger Bands parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerParams {
    /// Look-back period for the middle band SMA.
    pub period: usize,
    /// Standard deviation scaling factor for upper/lower bands.
    pub stdev_factor: f64,
}

impl Default for BollingerParams {
    fn default() -> Self {
        Self {
            period: 20,
            stdev_factor: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_script_conventions() {
        assert_eq!(EmaParams::default().period, 20);
        assert_eq!(ApoParams::default(), ApoParams { fast_period: 10, slow_period: 40 });
        let macd = MacdParams::default();
        assert_eq!((macd.fast_period, macd.slow_period, macd.signal_period), (12, 26, 9));
        let bb = BollingerParams::default();
        assert_eq!(bb.period, 20);
        assert!((bb.stdev_factor - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_params_serde_round_trip() {
        let params = MacdParams { fast_period: 5, slow_period: 13, signal_period: 4 };
        let json = serde_json::to_string(&params).unwrap();
        let back: MacdParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);

        let bb: BollingerParams = serde_json::from_str(r#"{"period":10,"stdev_factor":1.5}"#).unwrap();
        assert_eq!(bb.period, 10);
        assert!((bb.stdev_factor - 1.5).abs() < 1e-10);
    }
}

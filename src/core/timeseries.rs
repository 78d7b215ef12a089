//! Time-indexed series wrapper for output alignment.

use super::error::{Result, TalonError};
use super::types::Timestamp;
use crate::indicators;

/// Timestamp-aligned APO output.
#[derive(Debug, Clone)]
pub struct ApoSeries {
    /// Fast EMA of the input.
    pub fast_ema: TimeSeries<f64>,
    /// Slow EMA of the input.
    pub slow_ema: TimeSeries<f64>,
    /// Oscillator: fast EMA - slow EMA.
    pub apo: TimeSeries<f64>,
}

/// Timestamp-aligned MACD output.
#[derive(Debug, Clone)]
pub struct MacdSeries {
    /// MACD line (fast EMA - slow EMA).
    pub macd_line: TimeSeries<f64>,
    /// Signal line (EMA of MACD line).
    pub signal_line: TimeSeries<f64>,
    /// Histogram (MACD line - signal line).
    pub histogram: TimeSeries<f64>,
}

/// Timestamp-aligned RSI output.
#[derive(Debug, Clone)]
pub struct RsiSeries {
    /// Average gain over the trailing window.
    pub avg_gain: TimeSeries<f64>,
    /// Average loss over the trailing window.
    pub avg_loss: TimeSeries<f64>,
    /// RSI values on the 0-100 scale.
    pub rsi: TimeSeries<f64>,
}

/// Timestamp-aligned rolling standard deviation output.
#[derive(Debug, Clone)]
pub struct StdDevSeries {
    /// Simple moving average of the trailing window.
    pub sma: TimeSeries<f64>,
    /// Population standard deviation of the trailing window.
    pub std_dev: TimeSeries<f64>,
}

/// Timestamp-aligned Bollinger Bands output.
#[derive(Debug, Clone)]
pub struct BollingerSeries {
    /// Middle band (window SMA).
    pub middle: TimeSeries<f64>,
    /// Upper band (middle + stdev_factor * std_dev).
    pub upper: TimeSeries<f64>,
    /// Lower band (middle - stdev_factor * std_dev).
    pub lower: TimeSeries<f64>,
}

/// A time-indexed series of values.
///
/// Timestamps exist purely so derived series can be lined up with the prices
/// they were computed from; no indicator arithmetic ever reads them.
#[derive(Debug, Clone)]
pub struct TimeSeries<T> {
    /// Timestamps for each value.
    pub timestamps: Vec<Timestamp>,
    /// Values.
    pub values: Vec<T>,
}

impl<T> TimeSeries<T> {
    /// Create a new time series. Timestamps and values must have equal length.
    pub fn new(timestamps: Vec<Timestamp>, values: Vec<T>) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(TalonError::length_mismatch(values.len(), timestamps.len()));
        }
        Ok(Self { timestamps, values })
    }

    /// Create from values only, with synthetic 0..n timestamps.
    pub fn from_values(values: Vec<T>) -> Self {
        let timestamps = (0..values.len() as i64).collect();
        Self { timestamps, values }
    }

    /// Get the length.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get value at index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// Get timestamp at index.
    #[inline]
    pub fn get_timestamp(&self, index: usize) -> Option<Timestamp> {
        self.timestamps.get(index).copied()
    }

    /// Iterator over (timestamp, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Timestamp, &T)> {
        self.timestamps.iter().copied().zip(self.values.iter())
    }
}

impl TimeSeries<f64> {
    /// Attach this series' timestamps to a derived value sequence.
    ///
    /// Indicator outputs are index-aligned 1:1 with their input, so any output
    /// of the slice functions in [`crate::indicators`] can be re-clocked onto
    /// the input series this way (useful for the multi-output indicators such
    /// as MACD or Bollinger Bands).
    pub fn with_values(&self, values: Vec<f64>) -> Result<TimeSeries<f64>> {
        TimeSeries::new(self.timestamps.clone(), values)
    }

    /// Simple moving average over a trailing window, timestamp-aligned.
    pub fn sma(&self, period: usize) -> Result<TimeSeries<f64>> {
        self.with_values(indicators::sma(&self.values, period)?)
    }

    /// Exponential moving average, timestamp-aligned.
    pub fn ema(&self, period: usize) -> Result<TimeSeries<f64>> {
        self.with_values(indicators::ema(&self.values, period)?)
    }

    /// Momentum against the price `period` observations back, timestamp-aligned.
    pub fn momentum(&self, period: usize) -> Result<TimeSeries<f64>> {
        self.with_values(indicators::momentum(&self.values, period)?)
    }

    /// Absolute Price Oscillator, timestamp-aligned.
    pub fn apo(&self, fast_period: usize, slow_period: usize) -> Result<ApoSeries> {
        let result = indicators::apo(&self.values, fast_period, slow_period)?;
        Ok(ApoSeries {
            fast_ema: self.with_values(result.fast_ema)?,
            slow_ema: self.with_values(result.slow_ema)?,
            apo: self.with_values(result.apo)?,
        })
    }

    /// MACD line, signal line, and histogram, timestamp-aligned.
    pub fn macd(
        &self,
        fast_period: usize,
        slow_period: usize,
        signal_period: usize,
    ) -> Result<MacdSeries> {
        let result = indicators::macd(&self.values, fast_period, slow_period, signal_period)?;
        Ok(MacdSeries {
            macd_line: self.with_values(result.macd_line)?,
            signal_line: self.with_values(result.signal_line)?,
            histogram: self.with_values(result.histogram)?,
        })
    }

    /// RSI with its average gain/loss series, timestamp-aligned.
    pub fn rsi(&self, period: usize) -> Result<RsiSeries> {
        let result = indicators::rsi(&self.values, period)?;
        Ok(RsiSeries {
            avg_gain: self.with_values(result.avg_gain)?,
            avg_loss: self.with_values(result.avg_loss)?,
            rsi: self.with_values(result.rsi)?,
        })
    }

    /// Rolling standard deviation with its window SMA, timestamp-aligned.
    pub fn rolling_std_dev(&self, period: usize) -> Result<StdDevSeries> {
        let result = indicators::rolling_std_dev(&self.values, period)?;
        Ok(StdDevSeries {
            sma: self.with_values(result.sma)?,
            std_dev: self.with_values(result.std_dev)?,
        })
    }

    /// Bollinger Bands, timestamp-aligned.
    pub fn bollinger_bands(&self, period: usize, stdev_factor: f64) -> Result<BollingerSeries> {
        let result = indicators::bollinger_bands(&self.values, period, stdev_factor)?;
        Ok(BollingerSeries {
            middle: self.with_values(result.middle)?,
            upper: self.with_values(result.upper)?,
            lower: self.with_values(result.lower)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_length_mismatch() {
        let result = TimeSeries::new(vec![1, 2, 3], vec![1.0, 2.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_values_synthesizes_timestamps() {
        let ts = TimeSeries::from_values(vec![1.0, 2.0, 3.0]);
        assert_eq!(ts.len(), 3);
        assert_eq!(ts.get_timestamp(2), Some(2));
        assert_eq!(ts.get(1), Some(&2.0));
    }

    #[test]
    fn test_indicator_wrappers_preserve_timestamps() {
        let ts = TimeSeries::new(vec![100, 200, 300], vec![10.0, 12.0, 11.0]).unwrap();
        let ema = ts.ema(2).unwrap();
        assert_eq!(ema.timestamps, vec![100, 200, 300]);
        assert_eq!(ema.len(), 3);
        assert!((ema.values[0] - 10.0).abs() < 1e-10);

        let mom = ts.momentum(2).unwrap();
        assert_eq!(mom.timestamps, vec![100, 200, 300]);
    }

    #[test]
    fn test_multi_output_wrappers_preserve_timestamps() {
        let timestamps: Vec<i64> = (0..50).map(|i| 1_000 + i * 10).collect();
        let values: Vec<f64> = (1..=50).map(|x| x as f64 + (x as f64 * 0.3).sin()).collect();
        let ts = TimeSeries::new(timestamps.clone(), values).unwrap();

        let apo = ts.apo(10, 40).unwrap();
        assert_eq!(apo.fast_ema.timestamps, timestamps);
        assert_eq!(apo.slow_ema.timestamps, timestamps);
        assert_eq!(apo.apo.timestamps, timestamps);

        let macd = ts.macd(12, 26, 9).unwrap();
        assert_eq!(macd.macd_line.timestamps, timestamps);
        assert_eq!(macd.signal_line.timestamps, timestamps);
        assert_eq!(macd.histogram.timestamps, timestamps);

        let rsi = ts.rsi(14).unwrap();
        assert_eq!(rsi.avg_gain.timestamps, timestamps);
        assert_eq!(rsi.avg_loss.timestamps, timestamps);
        assert_eq!(rsi.rsi.timestamps, timestamps);

        let sd = ts.rolling_std_dev(20).unwrap();
        assert_eq!(sd.sma.timestamps, timestamps);
        assert_eq!(sd.std_dev.timestamps, timestamps);

        let bands = ts.bollinger_bands(20, 2.0).unwrap();
        assert_eq!(bands.middle.timestamps, timestamps);
        assert_eq!(bands.upper.timestamps, timestamps);
        assert_eq!(bands.lower.timestamps, timestamps);
    }

    #[test]
    fn test_multi_output_wrappers_match_slice_functions() {
        let ts = TimeSeries::from_values(vec![10.0, 10.0, 12.0, 11.0, 14.0]);

        let wrapped = ts.rsi(3).unwrap();
        let direct = crate::indicators::rsi(&ts.values, 3).unwrap();
        assert_eq!(wrapped.rsi.values, direct.rsi);
        assert_eq!(wrapped.avg_gain.values, direct.avg_gain);

        let bands = ts.bollinger_bands(3, 2.0).unwrap();
        let direct = crate::indicators::bollinger_bands(&ts.values, 3, 2.0).unwrap();
        assert_eq!(bands.upper.values, direct.upper);
        assert_eq!(bands.lower.values, direct.lower);
    }

    #[test]
    fn test_multi_output_wrappers_reject_invalid_parameters() {
        let ts = TimeSeries::from_values(vec![1.0, 2.0, 3.0]);
        assert!(ts.apo(40, 10).is_err());
        assert!(ts.macd(12, 26, 0).is_err());
        assert!(ts.rsi(0).is_err());
        assert!(ts.rolling_std_dev(0).is_err());
        assert!(ts.bollinger_bands(20, -1.0).is_err());
    }

    #[test]
    fn test_with_values_reclocks_derived_series() {
        let ts = TimeSeries::new(vec![7, 8], vec![1.0, 2.0]).unwrap();
        let derived = ts.with_values(vec![0.5, 0.75]).unwrap();
        assert_eq!(derived.timestamps, vec![7, 8]);
        assert!(ts.with_values(vec![0.5]).is_err());
    }

    #[test]
    fn test_iter_pairs() {
        let ts = TimeSeries::new(vec![1, 2], vec![5.0, 6.0]).unwrap();
        let pairs: Vec<(i64, f64)> = ts.iter().map(|(t, &v)| (t, v)).collect();
        assert_eq!(pairs, vec![(1, 5.0), (2, 6.0)]);
    }
}

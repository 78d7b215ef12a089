//! Momentum indicators: Momentum, APO, MACD, RSI.

use crate::core::error::TalonError;
use crate::core::smoother::ExpSmoother;
use crate::core::types::{ApoParams, MacdParams, MomentumParams, RsiParams};
use crate::core::window::HistoryBuffer;
use crate::core::Result;

/// Momentum (MOM).
///
/// Difference between the current price and the price at the front of a
/// `period`-sized trailing window. During warm-up the front is the earliest
/// price seen so far, so the first output is always 0.
///
/// # Arguments
/// * `data` - Price data
/// * `period` - How far to look back for the reference price
///
/// # Returns
/// Vector of momentum values, same length as the input
pub fn momentum(data: &[f64], period: usize) -> Result<Vec<f64>> {
    if period == 0 {
        return Err(TalonError::invalid_parameter("Momentum period must be > 0"));
    }

    let mut history = HistoryBuffer::new(period);
    let mut result = Vec::with_capacity(data.len());

    for &price in data {
        history.push(price);
        let reference = history.front().unwrap_or(price);
        result.push(price - reference);
    }

    Ok(result)
}

/// APO result structure.
#[derive(Debug, Clone)]
pub struct ApoResult {
    /// Fast EMA of the input.
    pub fast_ema: Vec<f64>,
    /// Slow EMA of the input.
    pub slow_ema: Vec<f64>,
    /// Oscillator: fast EMA - slow EMA.
    pub apo: Vec<f64>,
}

/// Absolute Price Oscillator (APO).
///
/// # Arguments
/// * `data` - Price data
/// * `fast_period` - Fast EMA period (default: 10)
/// * `slow_period` - Slow EMA period (default: 40)
///
/// # Returns
/// ApoResult with fast EMA, slow EMA, and oscillator series
pub fn apo(data: &[f64], fast_period: usize, slow_period: usize) -> Result<ApoResult> {
    if fast_period == 0 || slow_period == 0 {
        return Err(TalonError::invalid_parameter("APO periods must be > 0"));
    }
    if fast_period >= slow_period {
        return Err(TalonError::invalid_parameter("APO fast period must be < slow period"));
    }

    let mut fast = ExpSmoother::new(fast_period);
    let mut slow = ExpSmoother::new(slow_period);

    let n = data.len();
    let mut fast_ema = Vec::with_capacity(n);
    let mut slow_ema = Vec::with_capacity(n);
    let mut apo = Vec::with_capacity(n);

    for &price in data {
        let f = fast.update(price);
        let s = slow.update(price);
        fast_ema.push(f);
        slow_ema.push(s);
        apo.push(f - s);
    }

    Ok(ApoResult { fast_ema, slow_ema, apo })
}

/// MACD result structure.
#[derive(Debug, Clone)]
pub struct MacdResult {
    /// MACD line (fast EMA - slow EMA).
    pub macd_line: Vec<f64>,
    /// Signal line (EMA of MACD line).
    pub signal_line: Vec<f64>,
    /// Histogram (MACD line - signal line).
    pub histogram: Vec<f64>,
}

/// Moving Average Convergence Divergence (MACD).
///
/// The signal line is an EMA of the MACD line itself, seeded with the MACD
/// line's first value just like the price smoothers.
///
/// # Arguments
/// * `data` - Price data
/// * `fast_period` - Fast EMA period (default: 12)
/// * `slow_period` - Slow EMA period (default: 26)
/// * `signal_period` - Signal line EMA period (default: 9)
///
/// # Returns
/// MacdResult with MACD line, signal line, and histogram
pub fn macd(
    data: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<MacdResult> {
    if fast_period == 0 || slow_period == 0 || signal_period == 0 {
        return Err(TalonError::invalid_parameter("MACD periods must be > 0"));
    }
    if fast_period >= slow_period {
        return Err(TalonError::invalid_parameter("MACD fast period must be < slow period"));
    }

    let mut fast = ExpSmoother::new(fast_period);
    let mut slow = ExpSmoother::new(slow_period);
    let mut signal = ExpSmoother::new(signal_period);

    let n = data.len();
    let mut macd_line = Vec::with_capacity(n);
    let mut signal_line = Vec::with_capacity(n);
    let mut histogram = Vec::with_capacity(n);

    for &price in data {
        let m = fast.update(price) - slow.update(price);
        let s = signal.update(m);
        macd_line.push(m);
        signal_line.push(s);
        histogram.push(m - s);
    }

    Ok(MacdResult { macd_line, signal_line, histogram })
}

/// RSI result structure.
#[derive(Debug, Clone)]
pub struct RsiResult {
    /// Average gain over the trailing window.
    pub avg_gain: Vec<f64>,
    /// Average loss over the trailing window.
    pub avg_loss: Vec<f64>,
    /// RSI values on the 0-100 scale.
    pub rsi: Vec<f64>,
}

/// Relative Strength Index (RSI).
///
/// Per-step gains and losses are averaged over `period`-sized trailing
/// windows (simple means, not Wilder smoothing). The previous price is seeded
/// with the first price itself, so the first step records gain = loss = 0.
///
/// When the average loss is 0 the relative strength is defined as 0 rather
/// than infinity, which pins RSI to 0 for that step — including across
/// strictly rising windows. That is the behavior of the classic formulation
/// this follows, reproduced deliberately.
///
/// # Arguments
/// * `data` - Price data
/// * `period` - Lookback period for gain/loss averaging (default: 20)
///
/// # Returns
/// RsiResult with average gain, average loss, and RSI series
pub fn rsi(data: &[f64], period: usize) -> Result<RsiResult> {
    if period == 0 {
        return Err(TalonError::invalid_parameter("RSI period must be > 0"));
    }

    let mut gains = HistoryBuffer::new(period);
    let mut losses = HistoryBuffer::new(period);
    let mut last_price: Option<f64> = None;

    let n = data.len();
    let mut avg_gain = Vec::with_capacity(n);
    let mut avg_loss = Vec::with_capacity(n);
    let mut rsi = Vec::with_capacity(n);

    for &price in data {
        let prev = last_price.unwrap_or(price);
        gains.push((price - prev).max(0.0));
        losses.push((prev - price).max(0.0));
        last_price = Some(price);

        let gain = gains.mean();
        let loss = losses.mean();

        let rs = if loss > 0.0 { gain / loss } else { 0.0 };

        avg_gain.push(gain);
        avg_loss.push(loss);
        rsi.push(100.0 - 100.0 / (1.0 + rs));
    }

    Ok(RsiResult { avg_gain, avg_loss, rsi })
}

impl MomentumParams {
    /// Run Momentum with these parameters.
    pub fn compute(&self, data: &[f64]) -> Result<Vec<f64>> {
        momentum(data, self.period)
    }
}

impl ApoParams {
    /// Run the APO with these parameters.
    pub fn compute(&self, data: &[f64]) -> Result<ApoResult> {
        apo(data, self.fast_period, self.slow_period)
    }
}

impl MacdParams {
    /// Run the MACD with these parameters.
    pub fn compute(&self, data: &[f64]) -> Result<MacdResult> {
        macd(data, self.fast_period, self.slow_period, self.signal_period)
    }
}

impl RsiParams {
    /// Run the RSI with these parameters.
    pub fn compute(&self, data: &[f64]) -> Result<RsiResult> {
        rsi(data, self.period)
    }
}

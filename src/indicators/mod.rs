//! Technical indicators for Talon.
//!
//! All indicators are single forward-pass functions over slice inputs,
//! returning Vec outputs index-aligned 1:1 with the input. Warm-up never
//! withholds values: every input observation produces an output computed
//! over whatever partial window or smoother state exists so far.

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use momentum::{apo, macd, momentum, rsi, ApoResult, MacdResult, RsiResult};
pub use trend::{ema, sma};
pub use volatility::{bollinger_bands, rolling_std_dev, BollingerBandsResult, StdDevResult};

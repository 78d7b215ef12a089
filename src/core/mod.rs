//! Core primitives and shared types for Talon.

pub mod error;
pub mod smoother;
pub mod timeseries;
pub mod types;
pub mod window;

pub use error::{Result, TalonError};
pub use smoother::ExpSmoother;
pub use timeseries::{ApoSeries, BollingerSeries, MacdSeries, RsiSeries, StdDevSeries, TimeSeries};
pub use types::*;
pub use window::HistoryBuffer;

//! Talon - single-pass technical indicator core.
//!
//! This crate turns a chronological price series into derived series via
//! classical technical-analysis indicators:
//! - Trend: SMA, EMA
//! - Momentum: Momentum, APO, MACD (line + signal + histogram), RSI
//! - Volatility: rolling standard deviation, Bollinger Bands
//!
//! Each indicator consumes prices one value at a time, holds O(period) state
//! (a bounded [`core::HistoryBuffer`] and/or an exponential
//! [`core::ExpSmoother`]), and emits one output per input including during
//! warm-up. Data acquisition and chart rendering are the caller's concern;
//! the hand-off shape for both is [`core::TimeSeries`].

pub mod core;
pub mod indicators;

pub use crate::core::{Result, TalonError};

//! Momentum indicators: RSI, MFI, MACD

pub mod macd;
pub mod mfi;
pub mod rsi;

pub use macd::*;
pub use mfi::*;
pub use rsi::*;

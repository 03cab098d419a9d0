//! Collaborators around the engine: where series come from and how results are reused.

pub mod cache;
pub mod market_data;

pub use cache::*;
pub use market_data::*;

//! Signal evaluation interfaces.

pub mod categories;
pub mod engine;
pub mod momentum;
pub mod scoring;
pub mod table;
pub mod trend;

pub use categories::*;
pub use scoring::*;

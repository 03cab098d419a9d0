pub mod bank;
pub mod error;
pub mod validation;

pub mod momentum;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use bank::*;
pub use error::IndicatorError;
pub use validation::*;

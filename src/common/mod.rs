//! Shared numeric primitives.

pub mod math;

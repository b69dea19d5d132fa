//! Price chart series and the render contract of the charting engine.

pub mod engine;
pub mod series;

pub use engine::*;
pub use series::*;

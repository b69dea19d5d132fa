pub mod chart;
pub mod errors;
pub mod logging;
pub mod market;
pub mod navigation;

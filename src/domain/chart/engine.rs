use super::PriceSeries;
use crate::domain::errors::ChartError;

/// A live chart instance held by the adapter. `dispose` releases whatever the
/// engine attached to the page; a disposed resource is never drawn again.
pub trait ChartResource {
    fn dispose(&mut self);
}

/// Charting dependency that turns a series into a live chart
pub trait ChartEngine {
    fn construct(&self, series: &PriceSeries) -> Result<Box<dyn ChartResource>, ChartError>;
}

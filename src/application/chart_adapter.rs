use std::rc::Rc;

use crate::domain::{
    chart::{ChartEngine, ChartResource, PriceSeries},
    errors::ChartError,
    logging::LogComponent,
    market::HistoryPoint,
};
use crate::log_debug;

/// Owner of the one live price chart.
///
/// At most one [`ChartResource`] exists at any time: the previous chart is
/// disposed before the engine is asked for a new one, and the live chart is
/// disposed when the adapter goes away.
pub struct ChartAdapter {
    engine: Rc<dyn ChartEngine>,
    live: Option<Box<dyn ChartResource>>,
}

impl ChartAdapter {
    pub fn new(engine: Rc<dyn ChartEngine>) -> Self {
        Self { engine, live: None }
    }

    /// Chart `history` (newest first, as delivered) as an oldest-first close line.
    pub fn render(&mut self, history: &[HistoryPoint]) -> Result<(), ChartError> {
        let series = PriceSeries::from_history(history);

        if let Some(mut previous) = self.live.take() {
            previous.dispose();
        }

        let chart = self.engine.construct(&series)?;
        self.live = Some(chart);

        log_debug!(LogComponent::Application("ChartAdapter"), "📈 Chart rebuilt with {} points", series.len());
        Ok(())
    }

    pub fn has_live_chart(&self) -> bool {
        self.live.is_some()
    }
}

impl Drop for ChartAdapter {
    fn drop(&mut self) {
        if let Some(mut chart) = self.live.take() {
            chart.dispose();
        }
    }
}

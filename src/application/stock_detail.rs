use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::chart_adapter::ChartAdapter;
use super::gateway::{DataGateway, Endpoint, RequestOptions};
use super::render::StockDetailView;
use super::view_state::ViewStateController;
use crate::domain::{
    errors::AppResult,
    logging::LogComponent,
    market::{ChartPeriod, HistoryPoint, RealtimeQuote, StockCode, StockProfile},
    navigation::{Epoch, EpochCounter},
};
use crate::time_utils::{Clock, HistoryRange};
use crate::{log_debug, log_error, log_info};

/// Loads one stock's header, quote panel, history table and chart.
///
/// Profile and quote form an all-or-nothing barrier: the header renders only
/// when both arrive. History is fetched afterwards and on every period switch.
pub struct StockDetailController {
    gateway: Rc<DataGateway>,
    view_state: Rc<ViewStateController>,
    view: Rc<dyn StockDetailView>,
    chart: RefCell<ChartAdapter>,
    clock: Rc<dyn Clock>,
    default_period: ChartPeriod,
    history_rows: usize,
    period: Cell<ChartPeriod>,
    history_loads: EpochCounter,
}

impl StockDetailController {
    pub fn new(
        gateway: Rc<DataGateway>,
        view_state: Rc<ViewStateController>,
        view: Rc<dyn StockDetailView>,
        chart: ChartAdapter,
        clock: Rc<dyn Clock>,
        default_period: ChartPeriod,
        history_rows: usize,
    ) -> Self {
        Self {
            gateway,
            view_state,
            view,
            chart: RefCell::new(chart),
            clock,
            default_period,
            history_rows,
            period: Cell::new(default_period),
            history_loads: EpochCounter::new(),
        }
    }

    pub fn period(&self) -> ChartPeriod {
        self.period.get()
    }

    pub fn has_live_chart(&self) -> bool {
        self.chart.borrow().has_live_chart()
    }

    pub async fn open(&self, code: StockCode) -> AppResult<()> {
        let opened = self.view_state.show_stock_detail(code.clone());
        self.view.clear_detail();
        self.period.set(self.default_period);
        self.view.mark_period(self.default_period);

        log_info!(LogComponent::Application("StockDetail"), "📊 Opening {}", code);
        let history_before = self.history_loads.current();
        let header = self.load_header(&code, opened).await;

        if !self.view_state.is_current(opened) {
            log_debug!(LogComponent::Application("StockDetail"), "Left {} before history was requested", code);
            return header;
        }
        if !self.history_loads.is_current(history_before) {
            log_debug!(
                LogComponent::Application("StockDetail"),
                "Period switched to {} while {} was opening",
                self.period.get(),
                code
            );
            return header;
        }

        // The header failure is already surfaced; history still loads.
        let history = self.load_history(&code, self.period.get()).await;
        header.and(history)
    }

    /// Reload chart and table for the open stock; header and quote stay as they are.
    pub async fn change_period(&self, period: ChartPeriod) -> AppResult<()> {
        let Some(code) = self.view_state.current_stock() else {
            log_debug!(LogComponent::Application("StockDetail"), "No stock open, ignoring period {}", period);
            return Ok(());
        };

        self.period.set(period);
        self.view.mark_period(period);
        self.load_history(&code, period).await
    }

    async fn load_header(&self, code: &StockCode, opened: Epoch) -> AppResult<()> {
        let profile_endpoint = Endpoint::StockProfile(code.clone());
        let quote_endpoint = Endpoint::Realtime(code.clone());

        // Both requests run to completion; either failure fails the pair.
        let (profile, quote) = futures::join!(
            self.gateway.fetch::<StockProfile>(&profile_endpoint, RequestOptions::default()),
            self.gateway.fetch::<RealtimeQuote>(&quote_endpoint, RequestOptions::default()),
        );
        let (profile, quote) = (profile?, quote?);

        if !self.view_state.is_current(opened) {
            log_debug!(LogComponent::Application("StockDetail"), "Dropping stale header for {}", code);
            return Ok(());
        }

        self.view.render_header(&profile, &quote);
        Ok(())
    }

    async fn load_history(&self, code: &StockCode, period: ChartPeriod) -> AppResult<()> {
        let load = self.history_loads.advance();
        let opened = self.view_state.epoch();
        let range = HistoryRange::ending(self.clock.today(), period);

        let endpoint = Endpoint::History { code: code.clone(), range };
        let history: Vec<HistoryPoint> = self.gateway.fetch(&endpoint, RequestOptions::default()).await?;

        if !self.history_loads.is_current(load) || !self.view_state.is_current(opened) {
            log_debug!(LogComponent::Application("StockDetail"), "Dropping stale {} history for {}", period, code);
            return Ok(());
        }

        let shown = history.len().min(self.history_rows);
        self.view.render_history_table(&history[..shown]);

        if let Err(error) = self.chart.borrow_mut().render(&history) {
            log_error!(LogComponent::Application("StockDetail"), "Chart for {} not drawn: {}", code, error);
            return Err(error.into());
        }
        Ok(())
    }
}

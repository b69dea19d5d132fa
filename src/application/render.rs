//! Narrow render targets the controllers write into. The browser build backs
//! them with reactive signals; tests back them with recorders.

use crate::domain::{
    market::{ChartPeriod, HistoryPoint, MarketOverview, RealtimeQuote, StockCode, StockProfile, StockSummary},
    navigation::{Pagination, View},
};

/// Visibility switch for the three top-level regions
pub trait ViewRegions {
    fn set_region_visible(&self, view: View, visible: bool);
}

pub trait SearchResultsView {
    fn render_results(&self, results: &[StockSummary]);
    fn render_no_results(&self);
}

pub trait HotListView {
    fn set_loading(&self, loading: bool);
    fn clear_grid(&self);
    /// One card per stock, price and change showing the unknown marker.
    fn render_placeholders(&self, stocks: &[StockSummary]);
    fn render_empty(&self);
    /// Replace price and change of the card at `slot` only.
    fn patch_quote(&self, slot: usize, code: &StockCode, quote: &RealtimeQuote);
    fn render_pagination(&self, pagination: &Pagination);
}

pub trait StockDetailView {
    /// Drop the header, quote panel and history table of the previous stock.
    fn clear_detail(&self);
    fn render_header(&self, profile: &StockProfile, quote: &RealtimeQuote);
    fn render_history_table(&self, rows: &[HistoryPoint]);
    fn mark_period(&self, period: ChartPeriod);
}

pub trait MarketOverviewView {
    fn render_overview(&self, overview: &MarketOverview);
}

/// The single modal used for every user-facing failure
pub trait ErrorSurface {
    fn show_message(&self, message: &str);
    fn hide(&self);
}

//! Render targets backed by the global leptos signals.

use std::rc::Rc;

use leptos::SignalSet;
use leptos::SignalUpdate;

use super::view_model::{CardState, HistoryRow, MarketPanel, PaginationState, QuotePanel};
use crate::application::{
    RenderTargets,
    render::{ErrorSurface, HotListView, MarketOverviewView, SearchResultsView, StockDetailView, ViewRegions},
};
use crate::domain::{
    logging::LogComponent,
    market::{ChartPeriod, HistoryPoint, MarketOverview, RealtimeQuote, StockCode, StockProfile, StockSummary},
    navigation::{Pagination, View},
};
use crate::global_state::{
    active_period, error_message, history_rows, hot_cards, hot_empty, hot_loading, market_panel, pagination,
    quote_panel, search_cards, search_empty, visible_view,
};
use crate::log_debug;

/// One value implementing every render target; the components read the
/// same signals it writes.
#[derive(Debug, Default, Clone, Copy)]
pub struct LeptosViews;

impl LeptosViews {
    pub fn targets() -> RenderTargets {
        let views = Rc::new(LeptosViews);
        RenderTargets {
            regions: views.clone(),
            search_results: views.clone(),
            hot_list: views.clone(),
            stock_detail: views.clone(),
            market_overview: views.clone(),
            error_surface: views,
        }
    }
}

impl ViewRegions for LeptosViews {
    fn set_region_visible(&self, view: View, visible: bool) {
        // Exactly one region is shown at a time, so hiding is implied by the next reveal.
        if visible {
            visible_view().set(view);
        }
    }
}

impl SearchResultsView for LeptosViews {
    fn render_results(&self, results: &[StockSummary]) {
        search_empty().set(false);
        search_cards().set(results.iter().map(CardState::from_summary).collect());
    }

    fn render_no_results(&self) {
        search_cards().set(Vec::new());
        search_empty().set(true);
    }
}

impl HotListView for LeptosViews {
    fn set_loading(&self, loading: bool) {
        hot_loading().set(loading);
    }

    fn clear_grid(&self) {
        hot_empty().set(false);
        hot_cards().set(Vec::new());
    }

    fn render_placeholders(&self, stocks: &[StockSummary]) {
        hot_empty().set(false);
        hot_cards().set(stocks.iter().map(CardState::placeholder).collect());
    }

    fn render_empty(&self) {
        hot_cards().set(Vec::new());
        hot_empty().set(true);
    }

    fn patch_quote(&self, slot: usize, code: &StockCode, quote: &RealtimeQuote) {
        hot_cards().update(|cards| match cards.get_mut(slot) {
            Some(card) if &card.code == code => card.apply_quote(quote),
            _ => {
                log_debug!(LogComponent::Presentation("LeptosViews"), "Card {} for {} is gone", slot, code);
            }
        });
    }

    fn render_pagination(&self, state: &Pagination) {
        pagination().set(Some(PaginationState::from(state)));
    }
}

impl StockDetailView for LeptosViews {
    fn clear_detail(&self) {
        quote_panel().set(None);
        history_rows().set(Vec::new());
    }

    fn render_header(&self, profile: &StockProfile, quote: &RealtimeQuote) {
        quote_panel().set(Some(QuotePanel::new(profile, quote)));
    }

    fn render_history_table(&self, rows: &[HistoryPoint]) {
        history_rows().set(rows.iter().map(HistoryRow::from).collect());
    }

    fn mark_period(&self, period: ChartPeriod) {
        active_period().set(period);
    }
}

impl MarketOverviewView for LeptosViews {
    fn render_overview(&self, overview: &MarketOverview) {
        market_panel().set(MarketPanel::from(overview));
    }
}

impl ErrorSurface for LeptosViews {
    fn show_message(&self, message: &str) {
        error_message().set(Some(message.to_string()));
    }

    fn hide(&self) {
        error_message().set(None);
    }
}

//! Reactive UI state shared by the leptos components and the signal-backed
//! render targets.

use once_cell::sync::OnceCell;

use crate::domain::{market::ChartPeriod, navigation::View};
use crate::presentation::view_model::{CardState, HistoryRow, MarketPanel, PaginationState, QuotePanel};

crate::global_signals! {
    pub visible_view => visible_view: View = View::HotList,
    pub market_panel => market_panel: MarketPanel = MarketPanel::default(),
    pub hot_cards => hot_cards: Vec<CardState> = Vec::new(),
    pub hot_loading => hot_loading: bool = false,
    pub hot_empty => hot_empty: bool = false,
    pub pagination => pagination: Option<PaginationState> = None,
    pub search_cards => search_cards: Vec<CardState> = Vec::new(),
    pub search_empty => search_empty: bool = false,
    pub quote_panel => quote_panel: Option<QuotePanel> = None,
    pub history_rows => history_rows: Vec<HistoryRow> = Vec::new(),
    pub active_period => active_period: ChartPeriod = ChartPeriod::default(),
    pub error_message => error_message: Option<String> = None,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(Globals::create)
}

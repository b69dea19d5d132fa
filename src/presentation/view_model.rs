//! Display-ready snapshots of domain data, one per on-screen widget.

use super::format::{
    Trend, UNKNOWN, format_change, format_count, format_large_number, format_price, format_rate, format_signed,
};
use crate::domain::{
    market::{HistoryPoint, IndexSnapshot, MarketOverview, RealtimeQuote, StockCode, StockProfile, StockSummary},
    navigation::Pagination,
};
use crate::time_utils::format_iso_date;

/// A stock card in the hot list or the search results
#[derive(Debug, Clone, PartialEq)]
pub struct CardState {
    pub code: StockCode,
    pub name: String,
    pub market: String,
    pub price: String,
    pub change: String,
    pub trend: Option<Trend>,
}

impl CardState {
    /// Hot-list placeholder; the price arrives later via [`CardState::apply_quote`].
    pub fn placeholder(stock: &StockSummary) -> Self {
        Self {
            code: stock.code.clone(),
            name: stock.name.clone(),
            market: stock.market.clone().unwrap_or_default(),
            price: UNKNOWN.to_string(),
            change: UNKNOWN.to_string(),
            trend: None,
        }
    }

    /// Search result card, showing whatever the summary already carries.
    pub fn from_summary(stock: &StockSummary) -> Self {
        let mut card = Self::placeholder(stock);
        if let Some(price) = stock.current_price {
            card.price = format_price(price);
        }
        if let Some(rate) = stock.change_rate {
            card.change = format_rate(rate);
            card.trend = Some(Trend::of(rate));
        }
        card
    }

    pub fn apply_quote(&mut self, quote: &RealtimeQuote) {
        self.price = format_price(quote.current_price);
        self.change = format_rate(quote.change_rate);
        self.trend = Some(Trend::of(quote.change_rate));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexPanel {
    pub name: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
}

impl IndexPanel {
    fn from_snapshot(snapshot: &IndexSnapshot, fallback_name: &str) -> Self {
        Self {
            name: snapshot.name.clone().unwrap_or_else(|| fallback_name.to_string()),
            value: format!("{:.2}", snapshot.current),
            change: format_change(snapshot.change_amount, snapshot.change_rate),
            trend: Trend::of(snapshot.change_rate),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketPanel {
    pub sh_index: Option<IndexPanel>,
    pub sz_index: Option<IndexPanel>,
    pub total_stocks: String,
    pub up_count: String,
    pub down_count: String,
    pub flat_count: String,
}

impl From<&MarketOverview> for MarketPanel {
    fn from(overview: &MarketOverview) -> Self {
        Self {
            sh_index: overview.sh_index.as_ref().map(|s| IndexPanel::from_snapshot(s, "上证指数")),
            sz_index: overview.sz_index.as_ref().map(|s| IndexPanel::from_snapshot(s, "深证成指")),
            total_stocks: format_count(overview.total_stocks),
            up_count: format_count(overview.up_count),
            down_count: format_count(overview.down_count),
            flat_count: format_count(overview.flat_count),
        }
    }
}

/// Detail page header
#[derive(Debug, Clone, PartialEq)]
pub struct QuotePanel {
    pub title: String,
    pub price: String,
    pub change: String,
    pub trend: Trend,
    pub open: String,
    pub high: String,
    pub low: String,
    pub pre_close: String,
    pub volume: String,
    pub amount: String,
}

impl QuotePanel {
    pub fn new(profile: &StockProfile, quote: &RealtimeQuote) -> Self {
        Self {
            title: profile.title(),
            price: format_price(quote.current_price),
            change: format_change(quote.change_amount, quote.change_rate),
            trend: Trend::of(quote.change_rate),
            open: format_price(quote.open_price),
            high: format_price(quote.high_price),
            low: format_price(quote.low_price),
            pre_close: format_price(quote.pre_close),
            volume: format_large_number(quote.volume),
            amount: format_large_number(quote.amount),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub date: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub change: String,
    pub trend: Trend,
    pub volume: String,
}

impl From<&HistoryPoint> for HistoryRow {
    fn from(point: &HistoryPoint) -> Self {
        Self {
            date: format_iso_date(point.date),
            open: format!("{:.2}", point.open_price),
            high: format!("{:.2}", point.high_price),
            low: format!("{:.2}", point.low_price),
            close: format!("{:.2}", point.close_price),
            change: format!("{}%", format_signed(point.change_rate)),
            trend: Trend::of(point.change_rate),
            volume: format_large_number(point.volume),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    pub label: String,
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

impl From<&Pagination> for PaginationState {
    fn from(pagination: &Pagination) -> Self {
        Self {
            label: pagination.label(),
            previous_disabled: pagination.previous_disabled(),
            next_disabled: pagination.next_disabled(),
        }
    }
}

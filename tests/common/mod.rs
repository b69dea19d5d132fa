#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use chrono::NaiveDate;
use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture};
use serde_json::{Value, json};

use stock_board_wasm::application::{
    AppConfig, Collaborators, RenderTargets, StockApp, Transport,
    render::{ErrorSurface, HotListView, MarketOverviewView, SearchResultsView, StockDetailView, ViewRegions},
};
use stock_board_wasm::domain::{
    chart::{ChartEngine, ChartResource, PriceSeries},
    errors::{ChartError, RequestError, RequestResult},
    market::{ChartPeriod, HistoryPoint, MarketOverview, RealtimeQuote, StockCode, StockProfile, StockSummary},
    navigation::{Pagination, View},
};
use stock_board_wasm::time_utils::FixedClock;

/// Scripted backend: responses are matched on the longest registered URL
/// prefix; anything unscripted answers 404.
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<Vec<(String, RequestResult<Value>)>>,
    held: RefCell<HashMap<String, oneshot::Receiver<RequestResult<Value>>>>,
    calls: RefCell<Vec<String>>,
}

impl MockTransport {
    pub fn respond(&self, url_prefix: &str, body: Value) {
        self.responses.borrow_mut().push((url_prefix.to_string(), Ok(body)));
    }

    pub fn fail(&self, url_prefix: &str, status: u16, status_text: &str) {
        self.responses
            .borrow_mut()
            .push((url_prefix.to_string(), Err(RequestError::http(status, status_text))));
    }

    /// The next request for exactly `url` waits until the returned sender fires.
    pub fn hold(&self, url: &str) -> oneshot::Sender<RequestResult<Value>> {
        let (tx, rx) = oneshot::channel();
        self.held.borrow_mut().insert(url.to_string(), rx);
        tx
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn calls_matching(&self, fragment: &str) -> usize {
        self.calls.borrow().iter().filter(|url| url.contains(fragment)).count()
    }

    fn scripted(&self, url: &str) -> RequestResult<Value> {
        self.responses
            .borrow()
            .iter()
            .filter(|(prefix, _)| url.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| Err(RequestError::http(404, "Not Found")))
    }
}

impl Transport for MockTransport {
    fn get<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, RequestResult<Value>> {
        self.calls.borrow_mut().push(url.to_string());
        let held = self.held.borrow_mut().remove(url);
        match held {
            Some(rx) => async move { rx.await.unwrap_or_else(|_| Err(RequestError::transport("released without a response"))) }
                .boxed_local(),
            None => {
                let response = self.scripted(url);
                async move { response }.boxed_local()
            }
        }
    }
}

/// Everything the controllers asked the screen to do, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Region(View, bool),
    SearchResults(Vec<StockCode>),
    NoResults,
    Loading(bool),
    ClearGrid,
    Placeholders(Vec<StockCode>),
    EmptyGrid,
    Quote { slot: usize, code: StockCode, price: f64 },
    Pagination(Pagination),
    DetailCleared,
    Header { title: String, price: f64 },
    HistoryTable(Vec<NaiveDate>),
    Period(ChartPeriod),
    Overview(MarketOverview),
    ErrorShown(String),
    ErrorHidden,
}

#[derive(Default)]
pub struct RecordingViews {
    log: RefCell<Vec<Rendered>>,
}

impl RecordingViews {
    fn push(&self, event: Rendered) {
        self.log.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Rendered> {
        self.log.borrow().clone()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }

    pub fn count(&self, predicate: impl Fn(&Rendered) -> bool) -> usize {
        self.log.borrow().iter().filter(|event| predicate(event)).count()
    }

    pub fn headers(&self) -> Vec<String> {
        self.log
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Rendered::Header { title, .. } => Some(title.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn patched_slots(&self) -> Vec<usize> {
        self.log
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Rendered::Quote { slot, .. } => Some(*slot),
                _ => None,
            })
            .collect()
    }

    pub fn last_history_table(&self) -> Option<Vec<NaiveDate>> {
        self.log.borrow().iter().rev().find_map(|event| match event {
            Rendered::HistoryTable(dates) => Some(dates.clone()),
            _ => None,
        })
    }

    pub fn errors_shown(&self) -> Vec<String> {
        self.log
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Rendered::ErrorShown(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl ViewRegions for RecordingViews {
    fn set_region_visible(&self, view: View, visible: bool) {
        self.push(Rendered::Region(view, visible));
    }
}

impl SearchResultsView for RecordingViews {
    fn render_results(&self, results: &[StockSummary]) {
        self.push(Rendered::SearchResults(results.iter().map(|s| s.code.clone()).collect()));
    }

    fn render_no_results(&self) {
        self.push(Rendered::NoResults);
    }
}

impl HotListView for RecordingViews {
    fn set_loading(&self, loading: bool) {
        self.push(Rendered::Loading(loading));
    }

    fn clear_grid(&self) {
        self.push(Rendered::ClearGrid);
    }

    fn render_placeholders(&self, stocks: &[StockSummary]) {
        self.push(Rendered::Placeholders(stocks.iter().map(|s| s.code.clone()).collect()));
    }

    fn render_empty(&self) {
        self.push(Rendered::EmptyGrid);
    }

    fn patch_quote(&self, slot: usize, code: &StockCode, quote: &RealtimeQuote) {
        self.push(Rendered::Quote { slot, code: code.clone(), price: quote.current_price });
    }

    fn render_pagination(&self, pagination: &Pagination) {
        self.push(Rendered::Pagination(*pagination));
    }
}

impl StockDetailView for RecordingViews {
    fn clear_detail(&self) {
        self.push(Rendered::DetailCleared);
    }

    fn render_header(&self, profile: &StockProfile, quote: &RealtimeQuote) {
        self.push(Rendered::Header { title: profile.title(), price: quote.current_price });
    }

    fn render_history_table(&self, rows: &[HistoryPoint]) {
        self.push(Rendered::HistoryTable(rows.iter().map(|row| row.date).collect()));
    }

    fn mark_period(&self, period: ChartPeriod) {
        self.push(Rendered::Period(period));
    }
}

impl MarketOverviewView for RecordingViews {
    fn render_overview(&self, overview: &MarketOverview) {
        self.push(Rendered::Overview(overview.clone()));
    }
}

impl ErrorSurface for RecordingViews {
    fn show_message(&self, message: &str) {
        self.push(Rendered::ErrorShown(message.to_string()));
    }

    fn hide(&self) {
        self.push(Rendered::ErrorHidden);
    }
}

/// Chart engine that counts constructions and disposals
#[derive(Default)]
pub struct CountingEngine {
    constructed: Cell<usize>,
    disposed: Rc<Cell<usize>>,
    fail_next: Cell<bool>,
    series: RefCell<Vec<PriceSeries>>,
}

impl CountingEngine {
    pub fn constructed(&self) -> usize {
        self.constructed.get()
    }

    pub fn disposed(&self) -> usize {
        self.disposed.get()
    }

    pub fn live(&self) -> usize {
        self.constructed.get() - self.disposed.get()
    }

    pub fn fail_next(&self) {
        self.fail_next.set(true);
    }

    pub fn last_series(&self) -> Option<PriceSeries> {
        self.series.borrow().last().cloned()
    }
}

struct CountedChart {
    disposed: Rc<Cell<usize>>,
}

impl ChartResource for CountedChart {
    fn dispose(&mut self) {
        self.disposed.set(self.disposed.get() + 1);
    }
}

impl ChartEngine for CountingEngine {
    fn construct(&self, series: &PriceSeries) -> Result<Box<dyn ChartResource>, ChartError> {
        if self.fail_next.replace(false) {
            return Err(ChartError::SurfaceUnavailable("canvas missing".to_string()));
        }
        self.constructed.set(self.constructed.get() + 1);
        self.series.borrow_mut().push(series.clone());
        Ok(Box::new(CountedChart { disposed: Rc::clone(&self.disposed) }))
    }
}

pub const API: &str = "/api";

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

pub struct Harness {
    pub transport: Rc<MockTransport>,
    pub views: Rc<RecordingViews>,
    pub engine: Rc<CountingEngine>,
    pub app: StockApp,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let transport = Rc::new(MockTransport::default());
        let views = Rc::new(RecordingViews::default());
        let engine = Rc::new(CountingEngine::default());

        let targets = RenderTargets {
            regions: views.clone(),
            search_results: views.clone(),
            hot_list: views.clone(),
            stock_detail: views.clone(),
            market_overview: views.clone(),
            error_surface: views.clone(),
        };
        let collaborators = Collaborators {
            transport: transport.clone(),
            chart_engine: engine.clone(),
            clock: Rc::new(FixedClock(today())),
        };
        let app = StockApp::new(&config, targets, collaborators);

        Self { transport, views, engine, app }
    }
}

pub fn summary(code: &str, name: &str) -> Value {
    json!({ "code": code, "name": name, "market": "SH" })
}

pub fn page(codes: &[&str], count: u64) -> Value {
    let results: Vec<Value> = codes.iter().map(|code| summary(code, &format!("Stock {}", code))).collect();
    json!({ "results": results, "count": count })
}

pub fn profile(code: &str, name: &str) -> Value {
    json!({ "code": code, "name": name, "market": "SH", "industry": "Liquor" })
}

pub fn quote(price: f64) -> Value {
    json!({
        "current_price": price,
        "open_price": "1700.00",
        "high_price": 1720.5,
        "low_price": 1690.0,
        "pre_close": 1695.0,
        "change_amount": 5.0,
        "change_rate": "0.29",
        "volume": 1234567,
        "amount": "2100000000"
    })
}

/// History rows newest first, as the backend sends them
pub fn history(dates_and_closes: &[(&str, f64)]) -> Value {
    let rows: Vec<Value> = dates_and_closes
        .iter()
        .map(|(date, close)| {
            json!({
                "date": date,
                "open_price": close,
                "high_price": close,
                "low_price": close,
                "close_price": close,
                "change_rate": "0.00",
                "volume": 1000
            })
        })
        .collect();
    Value::Array(rows)
}

pub fn date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
}

/// Script a stock whose header and history both load.
pub fn script_stock(transport: &MockTransport, code: &str, name: &str, price: f64) {
    transport.respond(&format!("{}/stocks/{}/realtime/", API, code), quote(price));
    transport.respond(&format!("{}/stocks/{}/history/", API, code), history(&[("2024-02-29", price), ("2024-02-28", price - 1.0)]));
    transport.respond(&format!("{}/stocks/{}/", API, code), profile(code, name));
}

pub fn script_market(transport: &MockTransport) {
    transport.respond(
        &format!("{}/market/", API),
        json!({
            "sh_index": { "name": "上证指数", "current": "3050.12", "change_amount": 12.5, "change_rate": 0.41 },
            "total_stocks": 5000,
            "up_count": "2100",
            "down_count": 2500,
            "flat_count": 400
        }),
    );
}

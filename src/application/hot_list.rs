use futures::future::join_all;
use std::cell::Cell;
use std::rc::Rc;

use super::gateway::{DataGateway, Endpoint, RequestOptions};
use super::render::HotListView;
use crate::domain::{
    errors::AppResult,
    logging::LogComponent,
    market::{Paginated, RealtimeQuote, StockCode, StockSummary},
    navigation::{Epoch, EpochCounter, Pagination},
};
use crate::{log_debug, log_info, log_warn};

/// Direction of a pagination button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep {
    Previous,
    Next,
}

/// Paginated stock grid with per-card quote enrichment.
///
/// The page itself is all-or-nothing; the quotes are an isolated fan-out
/// where each card succeeds or keeps its placeholder on its own.
pub struct HotListLoader {
    gateway: Rc<DataGateway>,
    view: Rc<dyn HotListView>,
    page_size: u32,
    current_page: Cell<u32>,
    last_pagination: Cell<Option<Pagination>>,
    loads: EpochCounter,
}

impl HotListLoader {
    pub fn new(gateway: Rc<DataGateway>, view: Rc<dyn HotListView>, page_size: u32) -> Self {
        Self {
            gateway,
            view,
            page_size,
            current_page: Cell::new(1),
            last_pagination: Cell::new(None),
            loads: EpochCounter::new(),
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page.get()
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn last_pagination(&self) -> Option<Pagination> {
        self.last_pagination.get()
    }

    /// Replace the grid with `page`. Resolves once the page and every card
    /// enrichment have settled; a failed enrichment never fails the page.
    pub async fn load_page(&self, page: u32) -> AppResult<()> {
        let page = page.max(1);
        let load = self.loads.advance();

        self.view.set_loading(true);
        self.view.clear_grid();

        let endpoint = Endpoint::List { page, page_size: self.page_size };
        let listing = self
            .gateway
            .fetch::<Paginated<StockSummary>>(&endpoint, RequestOptions::default())
            .await;

        // A newer load owns the indicator until it settles.
        if self.loads.is_current(load) {
            self.view.set_loading(false);
        }
        let listing = listing?;

        if !self.loads.is_current(load) {
            log_debug!(LogComponent::Application("HotList"), "Dropping stale page {}", page);
            return Ok(());
        }

        if listing.results.is_empty() {
            self.view.render_empty();
        } else {
            self.view.render_placeholders(&listing.results);
        }

        let pagination = Pagination::new(page, self.page_size, listing.count);
        self.last_pagination.set(Some(pagination));
        self.view.render_pagination(&pagination);

        log_info!(
            LogComponent::Application("HotList"),
            "📋 Page {} / {} with {} stocks",
            page,
            pagination.total_pages(),
            listing.results.len()
        );

        self.enrich_cards(&listing.results, load).await;
        Ok(())
    }

    /// Move one page back or forward. A step whose button is disabled is ignored.
    pub async fn change_page(&self, step: PageStep) -> AppResult<()> {
        let current = self.current_page.get();
        let blocked = match step {
            PageStep::Previous => current <= 1,
            PageStep::Next => self
                .last_pagination
                .get()
                .is_some_and(|known| Pagination::new(current, self.page_size, known.count).next_disabled()),
        };
        if blocked {
            log_debug!(LogComponent::Application("HotList"), "Ignoring {:?} at page {}", step, current);
            return Ok(());
        }

        let target = match step {
            PageStep::Previous => current - 1,
            PageStep::Next => current + 1,
        };
        self.current_page.set(target);
        self.load_page(target).await
    }

    async fn enrich_cards(&self, stocks: &[StockSummary], load: Epoch) {
        let enrichments = stocks
            .iter()
            .enumerate()
            .map(|(slot, stock)| self.enrich_card(slot, &stock.code, load));
        join_all(enrichments).await;
    }

    async fn enrich_card(&self, slot: usize, code: &StockCode, load: Epoch) {
        let endpoint = Endpoint::Realtime(code.clone());
        match self.gateway.fetch::<RealtimeQuote>(&endpoint, RequestOptions::isolated()).await {
            Ok(quote) if self.loads.is_current(load) => self.view.patch_quote(slot, code, &quote),
            Ok(_) => {
                log_debug!(LogComponent::Application("HotList"), "Dropping stale quote for {}", code);
            }
            Err(error) => {
                log_warn!(
                    LogComponent::Application("HotList"),
                    "Quote for {} unavailable, keeping placeholder: {}",
                    code,
                    error.message
                );
            }
        }
    }
}

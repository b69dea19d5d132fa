use std::cell::Cell;
use strum::{Display as StrumDisplay, EnumIter};

use crate::domain::market::{ChartPeriod, StockCode};

/// The three mutually exclusive top-level regions of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, StrumDisplay)]
pub enum View {
    #[default]
    HotList,
    SearchResults,
    StockDetail,
}

/// Token identifying the navigation state an asynchronous operation was issued in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Epoch(u64);

impl Epoch {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Monotonic epoch source owned by exactly one component
#[derive(Debug, Default)]
pub struct EpochCounter {
    current: Cell<u64>,
}

impl EpochCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new epoch; everything issued under older ones becomes stale.
    pub fn advance(&self) -> Epoch {
        let next = self.current.get() + 1;
        self.current.set(next);
        Epoch(next)
    }

    pub fn current(&self) -> Epoch {
        Epoch(self.current.get())
    }

    pub fn is_current(&self, epoch: Epoch) -> bool {
        self.current.get() == epoch.0
    }
}

/// Point-in-time view of the navigation state assembled from its owners
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationContext {
    pub current_view: View,
    pub current_stock: Option<StockCode>,
    pub current_page: u32,
    pub page_size: u32,
    pub chart_period: ChartPeriod,
    pub epoch: Epoch,
}

impl NavigationContext {
    /// `current_stock` is set exactly when the detail view is showing.
    pub fn is_consistent(&self) -> bool {
        (self.current_view == View::StockDetail) == self.current_stock.is_some()
    }
}

/// Pagination controls derived from a list response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub count: u64,
}

impl Pagination {
    pub fn new(page: u32, page_size: u32, count: u64) -> Self {
        Self { page, page_size, count }
    }

    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.count.div_ceil(u64::from(self.page_size))
    }

    pub fn previous_disabled(&self) -> bool {
        self.page <= 1
    }

    pub fn next_disabled(&self) -> bool {
        u64::from(self.page) >= self.total_pages()
    }

    pub fn label(&self) -> String {
        format!("Page {} / {}", self.page, self.total_pages())
    }
}

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use strum::IntoEnumIterator;

use super::render::{SearchResultsView, ViewRegions};
use crate::domain::{
    logging::LogComponent,
    market::{StockCode, StockSummary},
    navigation::{Epoch, EpochCounter, View},
};
use crate::log_debug;

/// Sole writer of the visible view and the open stock.
///
/// Every transition hides the other two regions before revealing its own and
/// starts a new navigation epoch, so results issued under the previous view
/// can be recognised as stale.
pub struct ViewStateController {
    regions: Rc<dyn ViewRegions>,
    search_view: Rc<dyn SearchResultsView>,
    current_view: Cell<View>,
    current_stock: RefCell<Option<StockCode>>,
    epochs: EpochCounter,
}

impl ViewStateController {
    pub fn new(regions: Rc<dyn ViewRegions>, search_view: Rc<dyn SearchResultsView>) -> Self {
        let controller = Self {
            regions,
            search_view,
            current_view: Cell::new(View::HotList),
            current_stock: RefCell::new(None),
            epochs: EpochCounter::new(),
        };
        controller.reveal(View::HotList);
        controller
    }

    pub fn show_hot_list(&self) -> Epoch {
        self.current_stock.borrow_mut().take();
        self.reveal(View::HotList)
    }

    /// Results may be empty; that renders the empty-state message.
    pub fn show_search_results(&self, results: &[StockSummary]) -> Epoch {
        self.hide_all_except(View::SearchResults);
        self.current_stock.borrow_mut().take();

        if results.is_empty() {
            self.search_view.render_no_results();
        } else {
            self.search_view.render_results(results);
        }

        self.commit(View::SearchResults)
    }

    pub fn show_stock_detail(&self, code: StockCode) -> Epoch {
        *self.current_stock.borrow_mut() = Some(code);
        self.reveal(View::StockDetail)
    }

    pub fn current_view(&self) -> View {
        self.current_view.get()
    }

    pub fn current_stock(&self) -> Option<StockCode> {
        self.current_stock.borrow().clone()
    }

    pub fn epoch(&self) -> Epoch {
        self.epochs.current()
    }

    pub fn is_current(&self, epoch: Epoch) -> bool {
        self.epochs.is_current(epoch)
    }

    fn reveal(&self, target: View) -> Epoch {
        self.hide_all_except(target);
        self.commit(target)
    }

    fn hide_all_except(&self, target: View) {
        for view in View::iter().filter(|view| *view != target) {
            self.regions.set_region_visible(view, false);
        }
    }

    fn commit(&self, target: View) -> Epoch {
        self.regions.set_region_visible(target, true);
        self.current_view.set(target);
        let epoch = self.epochs.advance();
        log_debug!(LogComponent::Application("ViewState"), "🧭 {} visible (epoch {})", target, epoch.value());
        epoch
    }
}

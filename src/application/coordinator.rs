use std::rc::Rc;

use super::chart_adapter::ChartAdapter;
use super::config::AppConfig;
use super::error_presenter::ErrorPresenter;
use super::gateway::{DataGateway, Transport};
use super::hot_list::{HotListLoader, PageStep};
use super::market_overview::MarketOverviewLoader;
use super::render::{ErrorSurface, HotListView, MarketOverviewView, SearchResultsView, StockDetailView, ViewRegions};
use super::search::SearchController;
use super::stock_detail::StockDetailController;
use super::view_state::ViewStateController;
use crate::domain::{
    chart::ChartEngine,
    errors::AppResult,
    logging::LogComponent,
    market::{ChartPeriod, StockCode},
    navigation::NavigationContext,
};
use crate::time_utils::Clock;
use crate::{log_info, log_warn};

/// Named user actions; input handling only ever produces these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Search(String),
    BackToList,
    PreviousPage,
    NextPage,
    OpenStock(StockCode),
    ChangePeriod(ChartPeriod),
    CloseError,
    BackdropClick { inside_modal: bool },
}

/// Every render target the controllers write into
#[derive(Clone)]
pub struct RenderTargets {
    pub regions: Rc<dyn ViewRegions>,
    pub search_results: Rc<dyn SearchResultsView>,
    pub hot_list: Rc<dyn HotListView>,
    pub stock_detail: Rc<dyn StockDetailView>,
    pub market_overview: Rc<dyn MarketOverviewView>,
    pub error_surface: Rc<dyn ErrorSurface>,
}

/// External collaborators injected into the application
#[derive(Clone)]
pub struct Collaborators {
    pub transport: Rc<dyn Transport>,
    pub chart_engine: Rc<dyn ChartEngine>,
    pub clock: Rc<dyn Clock>,
}

/// Composition root: builds the controllers around one gateway, one error
/// presenter and one chart adapter, and routes actions to them.
pub struct StockApp {
    errors: Rc<ErrorPresenter>,
    view_state: Rc<ViewStateController>,
    market: MarketOverviewLoader,
    hot_list: HotListLoader,
    search: SearchController,
    detail: StockDetailController,
}

impl StockApp {
    pub fn new(config: &AppConfig, targets: RenderTargets, collaborators: Collaborators) -> Self {
        let errors = Rc::new(ErrorPresenter::new(targets.error_surface));
        let gateway = Rc::new(DataGateway::new(
            collaborators.transport,
            config.base_url.clone(),
            Rc::clone(&errors),
        ));
        let view_state = Rc::new(ViewStateController::new(targets.regions, targets.search_results));

        let market = MarketOverviewLoader::new(Rc::clone(&gateway), targets.market_overview);
        let hot_list = HotListLoader::new(Rc::clone(&gateway), targets.hot_list, config.page_size);
        let search = SearchController::new(Rc::clone(&gateway), Rc::clone(&view_state), Rc::clone(&errors));
        let detail = StockDetailController::new(
            gateway,
            Rc::clone(&view_state),
            targets.stock_detail,
            ChartAdapter::new(collaborators.chart_engine),
            collaborators.clock,
            config.default_period,
            config.history_rows,
        );

        log_info!(LogComponent::Application("StockApp"), "🚀 Stock board assembled (api: {})", config.base_url);

        Self { errors, view_state, market, hot_list, search, detail }
    }

    /// Initial load: market overview and the first hot-list page side by side.
    pub async fn start(&self) {
        let (market, hot_list) = futures::join!(
            self.market.load(),
            self.hot_list.load_page(self.hot_list.current_page()),
        );
        for (what, outcome) in [("market overview", market), ("hot list", hot_list)] {
            if let Err(error) = outcome {
                log_warn!(LogComponent::Application("StockApp"), "Initial {} failed: {}", what, error);
            }
        }
    }

    pub async fn dispatch(&self, action: Action) -> AppResult<()> {
        match action {
            Action::Search(keyword) => self.search.search(&keyword).await,
            Action::BackToList => {
                self.view_state.show_hot_list();
                Ok(())
            }
            Action::PreviousPage => self.hot_list.change_page(PageStep::Previous).await,
            Action::NextPage => self.hot_list.change_page(PageStep::Next).await,
            Action::OpenStock(code) => self.detail.open(code).await,
            Action::ChangePeriod(period) => self.detail.change_period(period).await,
            Action::CloseError => {
                self.errors.dismiss();
                Ok(())
            }
            Action::BackdropClick { inside_modal } => {
                self.errors.handle_backdrop_click(inside_modal);
                Ok(())
            }
        }
    }

    pub fn navigation(&self) -> NavigationContext {
        NavigationContext {
            current_view: self.view_state.current_view(),
            current_stock: self.view_state.current_stock(),
            current_page: self.hot_list.current_page(),
            page_size: self.hot_list.page_size(),
            chart_period: self.detail.period(),
            epoch: self.view_state.epoch(),
        }
    }

    pub fn errors(&self) -> &ErrorPresenter {
        &self.errors
    }

    pub fn has_live_chart(&self) -> bool {
        self.detail.has_live_chart()
    }
}

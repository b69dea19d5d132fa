pub mod chart_adapter;
pub mod config;
pub mod coordinator;
pub mod error_presenter;
pub mod gateway;
pub mod hot_list;
pub mod market_overview;
pub mod render;
pub mod search;
pub mod stock_detail;
pub mod view_state;

pub use chart_adapter::ChartAdapter;
pub use config::AppConfig;
pub use coordinator::*;
pub use error_presenter::ErrorPresenter;
pub use gateway::*;
pub use hot_list::{HotListLoader, PageStep};
pub use market_overview::MarketOverviewLoader;
pub use search::SearchController;
pub use stock_detail::StockDetailController;
pub use view_state::ViewStateController;

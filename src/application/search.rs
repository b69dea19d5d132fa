use std::rc::Rc;

use super::error_presenter::ErrorPresenter;
use super::gateway::{DataGateway, Endpoint, RequestOptions};
use super::view_state::ViewStateController;
use crate::domain::{
    errors::{AppResult, ValidationError},
    logging::LogComponent,
    market::StockSummary,
};
use crate::{log_debug, log_info};

pub struct SearchController {
    gateway: Rc<DataGateway>,
    view_state: Rc<ViewStateController>,
    errors: Rc<ErrorPresenter>,
}

impl SearchController {
    pub fn new(gateway: Rc<DataGateway>, view_state: Rc<ViewStateController>, errors: Rc<ErrorPresenter>) -> Self {
        Self { gateway, view_state, errors }
    }

    /// Blank keywords are rejected without touching the network.
    pub async fn search(&self, keyword: &str) -> AppResult<()> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            let error = ValidationError::EmptyKeyword;
            self.errors.show(&error.to_string());
            return Err(error.into());
        }

        let issued = self.view_state.epoch();
        let endpoint = Endpoint::Search { keyword: keyword.to_string() };
        let results: Vec<StockSummary> = self.gateway.fetch(&endpoint, RequestOptions::default()).await?;

        if !self.view_state.is_current(issued) {
            log_debug!(LogComponent::Application("Search"), "Dropping results for {:?}, view changed", keyword);
            return Ok(());
        }

        log_info!(LogComponent::Application("Search"), "🔍 {:?} matched {} stocks", keyword, results.len());
        self.view_state.show_search_results(&results);
        Ok(())
    }
}

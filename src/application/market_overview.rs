use std::rc::Rc;

use super::gateway::{DataGateway, Endpoint, RequestOptions};
use super::render::MarketOverviewView;
use crate::domain::{errors::AppResult, market::MarketOverview};

/// Index panels and up/down counts, fetched fresh on every load
pub struct MarketOverviewLoader {
    gateway: Rc<DataGateway>,
    view: Rc<dyn MarketOverviewView>,
}

impl MarketOverviewLoader {
    pub fn new(gateway: Rc<DataGateway>, view: Rc<dyn MarketOverviewView>) -> Self {
        Self { gateway, view }
    }

    pub async fn load(&self) -> AppResult<()> {
        let overview: MarketOverview = self
            .gateway
            .fetch(&Endpoint::MarketOverview, RequestOptions::default())
            .await?;
        self.view.render_overview(&overview);
        Ok(())
    }
}

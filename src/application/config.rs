use crate::domain::market::ChartPeriod;

/// In-memory settings of the client. Nothing here is read from the
/// environment or persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub base_url: String,
    pub page_size: u32,
    pub default_period: ChartPeriod,
    pub history_rows: usize,
    pub chart_canvas_id: String,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "/api".to_string(),
            page_size: 20,
            default_period: ChartPeriod::Month,
            history_rows: 10,
            chart_canvas_id: "price-chart".to_string(),
            chart_width: 800,
            chart_height: 320,
        }
    }
}

impl AppConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_history_rows(mut self, rows: usize) -> Self {
        self.history_rows = rows;
        self
    }

    pub fn with_chart_canvas(mut self, canvas_id: impl Into<String>, width: u32, height: u32) -> Self {
        self.chart_canvas_id = canvas_id.into();
        self.chart_width = width;
        self.chart_height = height;
        self
    }
}

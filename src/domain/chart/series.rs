use crate::domain::market::HistoryPoint;

/// Dataset label shown for the close-price line
pub const CLOSE_SERIES_LABEL: &str = "Close";

/// Render-ready line series: date labels and closing prices, oldest first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceSeries {
    pub label: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl PriceSeries {
    /// Build from history as the API delivers it (newest first).
    pub fn from_history(history: &[HistoryPoint]) -> Self {
        let (labels, values) = history
            .iter()
            .rev()
            .map(|point| (point.date.format("%Y-%m-%d").to_string(), point.close_price))
            .unzip();
        Self { label: CLOSE_SERIES_LABEL, labels, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(min, max)` of the values, `None` for an empty series
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut values = self.values.iter().copied();
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

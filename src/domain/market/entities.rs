use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::value_objects::{StockCode, lenient};

/// Snapshot of one market index (Shanghai composite, Shenzhen component)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSnapshot {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub current: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub change_amount: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub change_rate: f64,
}

/// Body of `/market/`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MarketOverview {
    #[serde(default)]
    pub sh_index: Option<IndexSnapshot>,
    #[serde(default)]
    pub sz_index: Option<IndexSnapshot>,
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub total_stocks: Option<u64>,
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub up_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub down_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub flat_count: Option<u64>,
}

/// Row of the list and search endpoints. Price fields are absent when the
/// backend had no quote at hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSummary {
    pub code: StockCode,
    pub name: String,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub current_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub change_rate: Option<f64>,
    #[serde(default)]
    pub market: Option<String>,
}

/// One page of a listing; page number and size stay with the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub results: Vec<T>,
    pub count: u64,
}

/// Body of `/stocks/{code}/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockProfile {
    pub code: StockCode,
    pub name: String,
    #[serde(default)]
    pub market: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
}

impl StockProfile {
    pub fn title(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

/// Body of `/stocks/{code}/realtime/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealtimeQuote {
    #[serde(deserialize_with = "lenient::number")]
    pub current_price: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub open_price: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub high_price: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub low_price: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub pre_close: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub change_amount: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub change_rate: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub volume: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub amount: f64,
}

/// One trading day from `/stocks/{code}/history/`, delivered newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: NaiveDate,
    #[serde(deserialize_with = "lenient::number")]
    pub open_price: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub high_price: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub low_price: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub close_price: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub change_rate: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub volume: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decimal_strings_and_numbers_both_decode() {
        let point: HistoryPoint = serde_json::from_value(json!({
            "date": "2024-01-03",
            "open_price": "10.10",
            "high_price": 10.5,
            "low_price": "9.90",
            "close_price": "10.20",
            "change_rate": -0.35,
            "volume": 1200000,
            "amount": 99
        }))
        .unwrap();
        assert_eq!(point.date, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        assert_eq!(point.close_price, 10.2);
        assert_eq!(point.volume, 1_200_000.0);
    }

    #[test]
    fn overview_tolerates_missing_index_and_counts() {
        let overview: MarketOverview = serde_json::from_value(json!({
            "sh_index": null,
            "sz_index": {"name": "SZ", "current": 10234.5, "change_amount": "-12.3", "change_rate": -0.12},
            "total_stocks": 10
        }))
        .unwrap();
        assert!(overview.sh_index.is_none());
        assert_eq!(overview.sz_index.unwrap().change_amount, -12.3);
        assert_eq!(overview.total_stocks, Some(10));
        assert_eq!(overview.up_count, None);
    }

    #[test]
    fn summary_without_quote_fields() {
        let summary: StockSummary = serde_json::from_value(json!({"code": "000001", "name": "Ping An Bank"})).unwrap();
        assert_eq!(summary.current_price, None);
        assert_eq!(summary.code.value(), "000001");
    }
}

use futures::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::rc::Rc;
use url::form_urlencoded;

use super::error_presenter::ErrorPresenter;
use crate::domain::{
    errors::{RequestError, RequestResult},
    logging::LogComponent,
    market::StockCode,
};
use crate::time_utils::HistoryRange;
use crate::{log_debug, log_warn};

/// Raw HTTP seam: issue a GET and hand back parsed JSON, or the failure.
pub trait Transport {
    fn get<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, RequestResult<Value>>;
}

/// Every backend endpoint the client talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    MarketOverview,
    Search { keyword: String },
    List { page: u32, page_size: u32 },
    StockProfile(StockCode),
    Realtime(StockCode),
    History { code: StockCode, range: HistoryRange },
}

impl Endpoint {
    /// Path plus query string, relative to the API base URL. Query values are
    /// URL-escaped.
    pub fn path(&self) -> String {
        match self {
            Endpoint::MarketOverview => "/market/".to_string(),
            Endpoint::Search { keyword } => {
                format!("/search/?{}", query(&[("q", keyword.as_str())]))
            }
            Endpoint::List { page, page_size } => {
                let (page, page_size) = (page.to_string(), page_size.to_string());
                format!("/list/?{}", query(&[("page", page.as_str()), ("page_size", page_size.as_str())]))
            }
            Endpoint::StockProfile(code) => format!("/stocks/{}/", code),
            Endpoint::Realtime(code) => format!("/stocks/{}/realtime/", code),
            Endpoint::History { code, range } => {
                let (start, end) = (range.start_param(), range.end_param());
                format!(
                    "/stocks/{}/history/?{}",
                    code,
                    query(&[("start_date", start.as_str()), ("end_date", end.as_str())])
                )
            }
        }
    }
}

fn query(pairs: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter())
        .finish()
}

/// What the gateway does with a failure besides returning it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log and show in the error modal.
    #[default]
    Surface,
    /// Log only; the caller renders its own fallback.
    LogOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestOptions {
    pub failure_policy: FailurePolicy,
}

impl RequestOptions {
    /// For per-item work whose failure must stay local to the item.
    pub fn isolated() -> Self {
        Self { failure_policy: FailurePolicy::LogOnly }
    }
}

/// Single point where requests go out and failures get classified. No
/// retries, no timeouts, no caching: every call reaches the transport.
pub struct DataGateway {
    transport: Rc<dyn Transport>,
    base_url: String,
    errors: Rc<ErrorPresenter>,
}

impl DataGateway {
    pub fn new(transport: Rc<dyn Transport>, base_url: impl Into<String>, errors: Rc<ErrorPresenter>) -> Self {
        Self { transport, base_url: base_url.into(), errors }
    }

    pub fn url_for(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint.path())
    }

    /// Untyped JSON, no schema checks.
    pub async fn request(&self, endpoint: &Endpoint, options: RequestOptions) -> RequestResult<Value> {
        let url = self.url_for(endpoint);
        log_debug!(LogComponent::Application("DataGateway"), "🌐 GET {}", url);

        self.transport
            .get(&url)
            .await
            .map_err(|error| self.report(&url, error, options))
    }

    /// JSON decoded into `T`. A body that does not decode is a request
    /// failure reported under the same policy.
    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: &Endpoint, options: RequestOptions) -> RequestResult<T> {
        let value = self.request(endpoint, options).await?;
        serde_json::from_value(value).map_err(|e| {
            let url = self.url_for(endpoint);
            let error = RequestError::decode(&endpoint.path(), e);
            self.report(&url, error, options)
        })
    }

    fn report(&self, url: &str, error: RequestError, options: RequestOptions) -> RequestError {
        match options.failure_policy {
            FailurePolicy::Surface => {
                log_warn!(LogComponent::Application("DataGateway"), "❌ {} failed: {}", url, error.message);
                self.errors.show(&error.to_string());
            }
            FailurePolicy::LogOnly => {
                log_warn!(LogComponent::Application("DataGateway"), "⚠️ {} failed (isolated): {}", url, error.message);
            }
        }
        error
    }
}

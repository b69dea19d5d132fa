use futures::FutureExt;
use futures::future::LocalBoxFuture;
use gloo::net::http::Request;
use serde_json::Value;
use std::collections::HashMap;

use crate::application::Transport;
use crate::domain::{
    errors::{RequestError, RequestResult},
    logging::LogComponent,
};
use crate::{log_debug, log_error};

/// Browser `fetch` transport built on gloo
#[derive(Debug, Clone)]
pub struct GlooTransport {
    default_headers: HashMap<String, String>,
}

impl Default for GlooTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl GlooTransport {
    pub fn new() -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self { default_headers }
    }

    pub fn add_header(mut self, key: String, value: String) -> Self {
        self.default_headers.insert(key, value);
        self
    }

    async fn get_json(&self, url: &str) -> RequestResult<Value> {
        let mut request = Request::get(url);
        for (key, value) in &self.default_headers {
            request = request.header(key, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RequestError::transport(format!("Request to {} failed: {}", url, e)))?;

        if !response.ok() {
            let error = RequestError::http(response.status(), &response.status_text());
            log_error!(LogComponent::Infrastructure("HTTP"), "{} -> {}", url, error.message);
            return Err(error);
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| RequestError::transport(format!("Invalid JSON from {}: {}", url, e)))?;

        log_debug!(LogComponent::Infrastructure("HTTP"), "✅ {} answered {}", url, response.status());
        Ok(body)
    }
}

impl Transport for GlooTransport {
    fn get<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, RequestResult<Value>> {
        self.get_json(url).boxed_local()
    }
}

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::Request;
use leptos::logging::log;
use serde_json::Value;

use super::query::Query;
use super::DataService;
use crate::config::BackendConfig;
use crate::error::FetchError;

/// Reads rows over the backend's REST endpoint.
#[derive(Debug, Clone)]
pub struct RestClient {
    config: BackendConfig,
}

impl RestClient {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }

    pub fn endpoint(&self, query: &Query) -> String {
        format!(
            "{}/rest/v1/{}?{}",
            self.config.url,
            query.table_name(),
            query.to_query_string()
        )
    }
}

impl DataService for RestClient {
    fn run(&self, query: &Query) -> LocalBoxFuture<'static, Result<Value, FetchError>> {
        let url = self.endpoint(query);
        let key = self.config.anon_key.clone();
        async move {
            log!("[BACKEND] GET {}", url);
            let response = Request::get(&url)
                .header("apikey", &key)
                .header("Authorization", &format!("Bearer {}", key))
                .header("Accept", "application/json")
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            if !response.ok() {
                let status = response.status();
                let message = response.text().await.unwrap_or_default();
                return Err(FetchError::Status { status, message });
            }

            response
                .json::<Value>()
                .await
                .map_err(|e| FetchError::Malformed(e.to_string()))
        }
        .boxed_local()
    }
}

pub mod query;
pub mod rest;
pub mod storage;

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use leptos::logging::warn;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::rc::Rc;

use crate::config::BackendConfig;
use crate::error::{ConfigError, FetchError};
use query::Query;
use rest::RestClient;
use storage::{PublicStorage, StorageResolver};

/// Runs read queries against the hosted backend and hands back the raw JSON body.
pub trait DataService {
    fn run(&self, query: &Query) -> LocalBoxFuture<'static, Result<Value, FetchError>>;
}

/// Stand-in used when no backend settings were provided; every read fails.
#[derive(Debug, Clone)]
pub struct Unconfigured {
    reason: String,
}

impl DataService for Unconfigured {
    fn run(&self, _query: &Query) -> LocalBoxFuture<'static, Result<Value, FetchError>> {
        futures::future::ready(Err(FetchError::NotConfigured(self.reason.clone()))).boxed_local()
    }
}

/// Handles to the backend collaborators, passed down to pages that read data.
#[derive(Clone)]
pub struct Backend {
    pub data: Rc<dyn DataService>,
    pub storage: Rc<dyn StorageResolver>,
}

impl Backend {
    pub fn new(data: Rc<dyn DataService>, storage: Rc<dyn StorageResolver>) -> Self {
        Self { data, storage }
    }

    pub fn connect(config: Result<BackendConfig, ConfigError>) -> Self {
        match config {
            Ok(config) => Self::new(
                Rc::new(RestClient::new(config.clone())),
                Rc::new(PublicStorage::new(&config.url)),
            ),
            Err(err) => {
                warn!("[BACKEND] {}; reads will fail", err);
                Self::new(
                    Rc::new(Unconfigured {
                        reason: err.to_string(),
                    }),
                    Rc::new(PublicStorage::new("")),
                )
            }
        }
    }
}

/// Runs `query` and decodes the body into rows.
pub async fn fetch_rows<T: DeserializeOwned>(
    data: &dyn DataService,
    query: &Query,
) -> Result<Vec<T>, FetchError> {
    let body = data.run(query).await?;
    decode_rows(body)
}

/// A `null` body counts as no rows.
pub fn decode_rows<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, FetchError> {
    match body {
        Value::Null => Ok(Vec::new()),
        rows => serde_json::from_value(rows).map_err(|e| FetchError::Malformed(e.to_string())),
    }
}

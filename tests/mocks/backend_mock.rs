use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use savory::backend::query::Query;
use savory::backend::storage::StorageResolver;
use savory::backend::{Backend, DataService};
use savory::error::FetchError;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::rc::Rc;

/// Serves fixed rows per table; tables listed in `failing` answer with an error.
pub struct MockData {
    pub failing: Vec<&'static str>,
}

impl DataService for MockData {
    fn run(&self, query: &Query) -> LocalBoxFuture<'static, Result<Value, FetchError>> {
        let table = query.table_name().to_string();
        let response = if self.failing.contains(&table.as_str()) {
            Err(FetchError::Network(format!("{} unreachable", table)))
        } else {
            match table.as_str() {
                "restaurants" => Ok(restaurants()),
                "reviews" => Ok(reviews()),
                _ => Ok(Value::Null),
            }
        };
        futures::future::ready(response).boxed_local()
    }
}

pub struct MockStorage;

impl StorageResolver for MockStorage {
    fn public_url(&self, bucket: &str, key: &str) -> String {
        format!("https://cdn.test/{}/{}", bucket, key)
    }
}

pub fn backend(failing: Vec<&'static str>) -> Backend {
    Backend::new(Rc::new(MockData { failing }), Rc::new(MockStorage))
}

pub fn restaurants() -> Value {
    json!([
        {
            "id": "r1", "name": "Casa Verde", "cuisine_type": "Mexican",
            "address": "4 Elm St", "price_range": "$$",
            "created_at": "2024-06-01T10:00:00Z"
        },
        {
            "id": "r2", "name": "Saffron House", "cuisine_type": "Indian",
            "address": "9 Oak Ave", "price_range": null,
            "created_at": "2024-06-02T10:00:00Z"
        }
    ])
}

pub fn reviews() -> Value {
    json!([
        {
            "id": "v1", "rating": 3, "content": "Solid tacos",
            "images": ["v1/a.jpg", "v1/b.jpg"],
            "created_at": "2024-06-03T10:00:00Z",
            "profiles": { "username": null, "avatar_url": null }
        },
        {
            "id": "v2", "rating": 5, "content": "Best curry in town",
            "images": null,
            "created_at": "2024-06-02T10:00:00Z",
            "profiles": { "username": "priya", "avatar_url": null }
        }
    ])
}

/// Every read waits until the test calls `release`.
#[derive(Clone, Default)]
pub struct GatedData {
    pending: Rc<RefCell<Vec<oneshot::Sender<Result<Value, FetchError>>>>>,
}

impl GatedData {
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Resolves every waiting read with a network error.
    pub fn release(&self) {
        for tx in self.pending.borrow_mut().drain(..) {
            let _ = tx.send(Err(FetchError::Network("released".into())));
        }
    }
}

impl DataService for GatedData {
    fn run(&self, _query: &Query) -> LocalBoxFuture<'static, Result<Value, FetchError>> {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().push(tx);
        async move {
            rx.await
                .unwrap_or_else(|_| Err(FetchError::Network("gate dropped".into())))
        }
        .boxed_local()
    }
}

pub fn gated_backend(data: GatedData) -> Backend {
    Backend::new(Rc::new(data), Rc::new(MockStorage))
}

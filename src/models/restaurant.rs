use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Timestamped;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine_type: String,
    pub address: String,
    #[serde(default)]
    pub price_range: Option<String>, // e.g. "$$"
    pub created_at: DateTime<Utc>,
}

impl Timestamped for Restaurant {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Client-side route of a restaurant's detail page.
pub fn restaurant_path(id: &str) -> String {
    format!("/restaurant/{}", urlencoding::encode(id))
}

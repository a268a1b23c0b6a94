use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::profile::{null_as_anonymous, Profile};
use super::Timestamped;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    pub rating: i32,                 // expected 0..=5
    pub content: String,
    #[serde(default)]
    pub images: Option<Vec<String>>, // storage keys in the review_images bucket
    pub created_at: DateTime<Utc>,
    #[serde(rename = "profiles", default, deserialize_with = "null_as_anonymous")]
    pub author: Profile,
}

impl Review {
    pub fn image_keys(&self) -> &[String] {
        self.images.as_deref().unwrap_or_default()
    }

    pub fn author_name(&self) -> &str {
        self.author.display_name()
    }
}

impl Timestamped for Review {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

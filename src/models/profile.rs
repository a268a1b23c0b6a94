use serde::{Deserialize, Deserializer, Serialize};

pub const ANONYMOUS: &str = "Anonymous";

/// Public identity of a reviewer, as joined onto a review.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    #[serde(default)]
    pub id: Option<String>, // not part of the joined projection
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>, // storage reference, not rendered yet
}

impl Profile {
    pub fn display_name(&self) -> &str {
        match self.username.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => ANONYMOUS,
        }
    }
}

/// A review whose author row is missing still gets a profile, just an anonymous one.
pub(crate) fn null_as_anonymous<'de, D>(deserializer: D) -> Result<Profile, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Profile>::deserialize(deserializer).map(Option::unwrap_or_default)
}

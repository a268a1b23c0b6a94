pub mod profile;
pub mod restaurant;
pub mod review;

use chrono::{DateTime, Utc};
use std::collections::HashSet;

pub use profile::Profile;
pub use restaurant::Restaurant;
pub use review::Review;

/// A row that has an identity and a creation time.
pub trait Timestamped {
    fn id(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
}

/// Orders rows newest first, keeps the first occurrence of each id and caps the
/// result at `limit` entries. The sort is stable, so rows sharing a timestamp keep
/// the order the backend sent them in.
pub fn latest_first<T: Timestamped>(mut rows: Vec<T>, limit: usize) -> Vec<T> {
    rows.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    let mut seen = HashSet::new();
    rows.retain(|row| seen.insert(row.id().to_owned()));
    rows.truncate(limit);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn restaurant(id: &str, minute: u32) -> Restaurant {
        Restaurant {
            id: id.into(),
            name: format!("Place {id}"),
            cuisine_type: "Thai".into(),
            address: "1 Main St".into(),
            price_range: None,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).unwrap(),
        }
    }

    #[test]
    fn test_latest_first_sorts_descending() {
        let rows = vec![restaurant("a", 1), restaurant("b", 30), restaurant("c", 15)];
        let ids: Vec<_> = latest_first(rows, 6).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_latest_first_drops_duplicate_ids() {
        let rows = vec![restaurant("a", 10), restaurant("a", 5), restaurant("b", 1)];
        let kept = latest_first(rows, 6);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].id, "a");
        assert_eq!(kept[0].created_at.format("%M").to_string(), "10");
    }

    #[test]
    fn test_latest_first_truncates() {
        let rows: Vec<_> = (0..9).map(|i| restaurant(&i.to_string(), i)).collect();
        let kept = latest_first(rows, 6);
        assert_eq!(kept.len(), 6);
        assert_eq!(kept[0].id, "8");
        assert_eq!(kept[5].id, "3");
    }
}

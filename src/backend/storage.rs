/// Turns a stored object key into a public URL. Pure string building, no I/O.
pub trait StorageResolver {
    fn public_url(&self, bucket: &str, key: &str) -> String;
}

/// Public-bucket URLs of the hosted object store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicStorage {
    base_url: String,
}

impl PublicStorage {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl StorageResolver for PublicStorage {
    fn public_url(&self, bucket: &str, key: &str) -> String {
        let path = key
            .trim_start_matches('/')
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url,
            urlencoding::encode(bucket),
            path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_url() {
        let storage = PublicStorage::new("https://demo.example.co/");
        assert_eq!(
            storage.public_url("review_images", "u1/photo.jpg"),
            "https://demo.example.co/storage/v1/object/public/review_images/u1/photo.jpg"
        );
    }

    #[test]
    fn test_key_segments_are_encoded() {
        let storage = PublicStorage::new("https://demo.example.co");
        assert_eq!(
            storage.public_url("review_images", "/u1/my photo #2.jpg"),
            "https://demo.example.co/storage/v1/object/public/review_images/u1/my%20photo%20%232.jpg"
        );
    }
}

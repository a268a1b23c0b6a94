use thiserror::Error;

/// Why a read against the backend did not produce rows.
///
/// The home page treats every variant the same way (log + toast); the split only
/// exists so the diagnostic log says what actually went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("backend not configured: {0}")]
    NotConfigured(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing setting {0}")]
    Missing(&'static str),
    #[error("invalid backend url {0:?}, expected http:// or https://")]
    InvalidUrl(String),
}

use crate::error::ConfigError;

pub const BACKEND_URL_VAR: &str = "SAVORY_BACKEND_URL";
pub const BACKEND_KEY_VAR: &str = "SAVORY_BACKEND_ANON_KEY";

/// Location and public key of the hosted backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

impl BackendConfig {
    pub fn new(url: &str, anon_key: &str) -> Result<Self, ConfigError> {
        let url = url.trim().trim_end_matches('/');
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(url.to_string()));
        }
        let anon_key = anon_key.trim();
        if anon_key.is_empty() {
            return Err(ConfigError::Missing(BACKEND_KEY_VAR));
        }
        Ok(Self {
            url: url.to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    /// Settings baked in when the crate was compiled. The WASM client has no
    /// process environment, so this is the only source it can use.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            option_env!("SAVORY_BACKEND_URL"),
            option_env!("SAVORY_BACKEND_ANON_KEY"),
        )
    }

    /// Settings from the running process, used by the server at startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var(BACKEND_URL_VAR).ok();
        let key = std::env::var(BACKEND_KEY_VAR).ok();
        Self::from_parts(url.as_deref(), key.as_deref())
    }

    fn from_parts(url: Option<&str>, key: Option<&str>) -> Result<Self, ConfigError> {
        let url = url.ok_or(ConfigError::Missing(BACKEND_URL_VAR))?;
        let key = key.ok_or(ConfigError::Missing(BACKEND_KEY_VAR))?;
        Self::new(url, key)
    }
}

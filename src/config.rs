//! Configuration
//!
//! The API base URL is baked in at build time from `GUESTBOOK_API_URL`.

/// Default backend location for local development
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/guestbook";

/// Backend connection settings
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Collection URL, without trailing slash (e.g., "http://127.0.0.1:5000/guestbook")
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env_value(option_env!("GUESTBOOK_API_URL"))
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_API_URL),
        }
    }
}

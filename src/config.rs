//! Client configuration.
//!
//! The API base URL is an explicit value injected at construction time,
//! never read from the environment at call sites. `from_env` is the single
//! place the process environment is consulted.

use crate::locale::Locale;

/// Default backend, matching the local development setup.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/v1";

/// Default page size for the public list.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Configuration for the API client and reader UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the FortuneNews REST API, without a trailing slash.
    pub base_url: String,
    /// Initial display locale.
    pub locale: Locale,
    /// Page size requested for list fetches.
    pub page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            locale: Locale::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ApiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL. A trailing slash is trimmed so endpoint paths
    /// can always be appended as `/path`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        while url.ends_with('/') {
            url.pop();
        }
        self.base_url = url;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Build a config from `FORTUNE_NEWS_API_URL` and `FORTUNE_NEWS_LOCALE`.
    /// Unset or unrecognized values fall back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("FORTUNE_NEWS_API_URL") {
            if !url.is_empty() {
                config = config.with_base_url(url);
            }
        }
        if let Ok(locale) = std::env::var("FORTUNE_NEWS_LOCALE") {
            if let Some(locale) = Locale::parse(&locale) {
                config = config.with_locale(locale);
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig::new().with_base_url("https://api.example.com/v1/");
        assert_eq!(config.base_url, "https://api.example.com/v1");
    }

    #[test]
    #[serial]
    fn from_env_reads_url_and_locale() {
        std::env::set_var("FORTUNE_NEWS_API_URL", "https://news.example.com/api/");
        std::env::set_var("FORTUNE_NEWS_LOCALE", "ko");
        let config = ApiConfig::from_env();
        assert_eq!(config.base_url, "https://news.example.com/api");
        assert_eq!(config.locale, Locale::Ko);
        std::env::remove_var("FORTUNE_NEWS_API_URL");
        std::env::remove_var("FORTUNE_NEWS_LOCALE");
    }

    #[test]
    #[serial]
    fn from_env_ignores_unrecognized_locale() {
        std::env::remove_var("FORTUNE_NEWS_API_URL");
        std::env::set_var("FORTUNE_NEWS_LOCALE", "fr");
        let config = ApiConfig::from_env();
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.base_url, DEFAULT_API_URL);
        std::env::remove_var("FORTUNE_NEWS_LOCALE");
    }
}

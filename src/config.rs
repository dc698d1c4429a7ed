use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_PAGE_SIZE: u32 = 20;
const DEFAULT_DEBOUNCE_MS: u32 = 300;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub page_size: u32,
    pub search_debounce_ms: u32,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: DEFAULT_DEBOUNCE_MS,
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Loads configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_URL"),
            option_env!("PAGE_SIZE"),
            option_env!("SEARCH_DEBOUNCE_MS"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    fn from_values(
        api_url: Option<&str>,
        page_size: Option<&str>,
        debounce_ms: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        Self {
            api_url: api_url
                .unwrap_or(DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            page_size: page_size
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_PAGE_SIZE),
            search_debounce_ms: debounce_ms
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DEBOUNCE_MS),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }

    /// API origin without a trailing slash
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Browser navigation target for the login entry point
    pub fn login_url(&self) -> String {
        format!("{}/auth/login", self.api_url)
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

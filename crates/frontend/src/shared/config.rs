//! Application configuration.
//!
//! The embedded `DEFAULT_CONFIG` document is always valid. A build may
//! replace it with `ADMIN_CONFIG_TOML` (full document) and override the API
//! base URL alone with `ADMIN_API_BASE`.

use once_cell::sync::Lazy;
use serde::Deserialize;

pub const DEFAULT_CONFIG: &str = r#"
[api]
# base_url = "https://api.example.com"
port = 5000
request_timeout_ms = 30000

[ui]
page_size = 20
analytics_page_size = 100
toast_timeout_ms = 4000
"#;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_timeout_ms")]
    pub request_timeout_ms: u32,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_analytics_page_size")]
    pub analytics_page_size: u32,
    #[serde(default = "default_toast_timeout_ms")]
    pub toast_timeout_ms: u32,
}

fn default_port() -> u16 {
    5000
}

fn default_timeout_ms() -> u32 {
    30_000
}

fn default_page_size() -> u32 {
    20
}

fn default_analytics_page_size() -> u32 {
    100
}

fn default_toast_timeout_ms() -> u32 {
    4000
}

impl ApiConfig {
    /// Base URL: the configured one, or `{protocol}//{hostname}:{port}`.
    pub fn resolve_base(&self, protocol: &str, hostname: &str) -> String {
        match self.base_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
            _ => format!("{}//{}:{}", protocol, hostname, self.port),
        }
    }
}

pub fn parse_config(text: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(text)
}

fn load_config() -> AppConfig {
    let mut config = match option_env!("ADMIN_CONFIG_TOML") {
        Some(text) => match parse_config(text) {
            Ok(c) => c,
            Err(e) => {
                log::error!("ADMIN_CONFIG_TOML is invalid, using defaults: {}", e);
                default_config()
            }
        },
        None => default_config(),
    };
    if let Some(base) = option_env!("ADMIN_API_BASE") {
        config.api.base_url = Some(base.to_string());
    }
    log::debug!("Loaded config: {:?}", config);
    config
}

fn default_config() -> AppConfig {
    parse_config(DEFAULT_CONFIG).unwrap_or_else(|_| AppConfig {
        api: ApiConfig {
            base_url: None,
            port: default_port(),
            request_timeout_ms: default_timeout_ms(),
        },
        ui: UiConfig {
            page_size: default_page_size(),
            analytics_page_size: default_analytics_page_size(),
            toast_timeout_ms: default_toast_timeout_ms(),
        },
    })
}

static CONFIG: Lazy<AppConfig> = Lazy::new(load_config);

pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = parse_config(DEFAULT_CONFIG).expect("default config must parse");
        assert_eq!(config.api.base_url, None);
        assert_eq!(config.api.port, 5000);
        assert_eq!(config.ui.page_size, 20);
        assert_eq!(config.ui.analytics_page_size, 100);
        assert_eq!(config.ui.toast_timeout_ms, 4000);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = parse_config("[api]\nbase_url = \"https://shop.test/\"\n[ui]\n").unwrap();
        assert_eq!(config.api.port, 5000);
        assert_eq!(config.api.request_timeout_ms, 30_000);
        assert_eq!(config.ui.page_size, 20);
    }

    #[test]
    fn test_resolve_base() {
        let mut api = parse_config(DEFAULT_CONFIG).unwrap().api;
        assert_eq!(api.resolve_base("https:", "admin.shop.test"), "https://admin.shop.test:5000");

        api.base_url = Some("https://api.shop.test/".into());
        assert_eq!(api.resolve_base("https:", "ignored"), "https://api.shop.test");

        api.base_url = Some("  ".into());
        assert_eq!(api.resolve_base("http:", "localhost"), "http://localhost:5000");
    }
}

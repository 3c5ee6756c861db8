//! Base URL of the backend API.

use super::config::config;
use once_cell::sync::Lazy;

static API_BASE: Lazy<String> = Lazy::new(|| {
    let (protocol, hostname) = match web_sys::window() {
        Some(w) => {
            let location = w.location();
            (
                location.protocol().unwrap_or_else(|_| "http:".to_string()),
                location
                    .hostname()
                    .unwrap_or_else(|_| "127.0.0.1".to_string()),
            )
        }
        None => ("http:".to_string(), "127.0.0.1".to_string()),
    };
    let base = config().api.resolve_base(&protocol, &hostname);
    log::info!("API base: {}", base);
    base
});

/// Resolved once per page load.
pub fn api_base() -> &'static str {
    &API_BASE
}

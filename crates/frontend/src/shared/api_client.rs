//! HTTP transport shared by every domain service.
//!
//! One request per call: no retries, no caching. The bearer token is read
//! from storage on every request so a fresh login applies immediately.

use super::api_error::{decode_data, decode_unit, ApiError};
use crate::system::auth::storage;
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    fn builder(&self, url: &str) -> RequestBuilder {
        match self {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        }
    }
}

#[derive(Clone, Copy)]
pub struct ApiClient {
    base: &'static str,
    timeout_ms: u32,
    on_unauthorized: Option<Callback<()>>,
}

impl ApiClient {
    pub fn new(base: &'static str, timeout_ms: u32) -> Self {
        Self {
            base,
            timeout_ms,
            on_unauthorized: None,
        }
    }

    /// Called after a 401 once the stored token has been dropped.
    pub fn with_unauthorized_handler(mut self, handler: Callback<()>) -> Self {
        self.on_unauthorized = Some(handler);
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// `base + path + ?query`; fields skipped by serde leave no trace.
    pub fn url_with_query<Q: Serialize>(&self, path: &str, query: &Q) -> Result<String, ApiError> {
        let qs = serde_qs::to_string(query)?;
        if qs.is_empty() {
            Ok(self.url(path))
        } else {
            Ok(format!("{}?{}", self.url(path), qs))
        }
    }

    // Request methods take a URL the service already built with `url` or
    // `url_with_query`.

    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        self.fetch(Method::Get, url, None).await
    }

    pub async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        self.fetch(Method::Post, url, Some(to_json(body)?)).await
    }

    pub async fn put_json<B, T>(&self, url: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        self.fetch(Method::Put, url, Some(to_json(body)?)).await
    }

    pub async fn put_json_unit<B: Serialize>(&self, url: &str, body: &B) -> Result<(), ApiError> {
        self.fetch_unit(Method::Put, url, Some(to_json(body)?)).await
    }

    /// Bodiless write; the response carries no data.
    pub async fn send(&self, method: Method, url: &str) -> Result<(), ApiError> {
        self.fetch_unit(method, url, None).await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        let result = match self.execute(method, url, body).await {
            Ok((status, text)) => decode_data(status, &text),
            Err(e) => Err(e),
        };
        self.observe(method, url, result)
    }

    async fn fetch_unit(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Result<(), ApiError> {
        let result = match self.execute(method, url, body).await {
            Ok((status, text)) => decode_unit(status, &text),
            Err(e) => Err(e),
        };
        self.observe(method, url, result)
    }

    async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Result<(u16, String), ApiError> {
        log::debug!("{} {}", method.as_str(), url);

        let mut builder = method.builder(url).header("Accept", "application/json");
        if let Some(token) = storage::get_access_token() {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let controller = web_sys::AbortController::new().ok();
        if let Some(controller) = &controller {
            builder = builder.abort_signal(Some(&controller.signal()));
            let controller = controller.clone();
            let timeout_ms = self.timeout_ms;
            spawn_local(async move {
                TimeoutFuture::new(timeout_ms).await;
                controller.abort();
            });
        }

        let request = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(json)?,
            None => builder.build()?,
        };

        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => {
                let timed_out = controller
                    .as_ref()
                    .map(|c| c.signal().aborted())
                    .unwrap_or(false);
                return Err(if timed_out {
                    ApiError::Network(format!("Request timed out after {} ms", self.timeout_ms))
                } else {
                    ApiError::from(e)
                });
            }
        };

        let status = response.status();
        let text = response.text().await?;
        Ok((status, text))
    }

    fn observe<T>(&self, method: Method, url: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
        match &result {
            Ok(_) => {}
            Err(ApiError::Unauthorized) => {
                log::warn!("{} {} -> 401, ending session", method.as_str(), url);
                storage::clear_tokens();
                if let Some(handler) = self.on_unauthorized {
                    handler.run(());
                }
            }
            Err(e @ ApiError::Api(_)) => log::warn!("{} {} -> {}", method.as_str(), url, e),
            Err(e) => log::error!("{} {} -> {}", method.as_str(), url, e),
        }
        result
    }
}

fn to_json<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Request(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::PageQuery;

    #[test]
    fn test_url_with_query_skips_unset_fields() {
        let client = ApiClient::new("http://localhost:5000", 1000);
        let url = client
            .url_with_query("/api/products", &PageQuery::default())
            .unwrap();
        assert_eq!(url, "http://localhost:5000/api/products?pageNumber=1&pageSize=20");
    }

    #[test]
    fn test_url_with_query_all_fields() {
        let client = ApiClient::new("http://localhost:5000", 1000);
        let mut query = PageQuery::with_page_size(50);
        query.set_search("lamp");
        query.include_deleted = true;
        query.go_to(3);
        let url = client.url_with_query("/api/stores", &query).unwrap();
        assert_eq!(
            url,
            "http://localhost:5000/api/stores?pageNumber=3&pageSize=50&search=lamp&includeDeleted=true"
        );
    }

    #[test]
    fn test_method_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }
}

//! Thin HTTP call helper over `reqwest`.
//!
//! One full-request entry point returning status, headers, and body bytes,
//! plus get/post conveniences. The free [`get`]/[`post`] functions share a
//! lazily-built default client so one-off calls do not rebuild a connection
//! pool each time.

use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use thiserror::Error;

/// Default per-request timeout for clients built by this crate.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid header name '{0}'")]
    HeaderName(String),
    #[error("invalid header value for '{0}'")]
    HeaderValue(String),
}

/// Result type alias for kitbag-http operations.
pub type Result<T> = std::result::Result<T, HttpError>;

/// Response surface of [`HttpCaller::request`]: status, response headers,
/// raw body bytes.
#[derive(Debug)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// HTTP caller with a reusable connection pool and a fixed timeout.
#[derive(Debug, Clone)]
pub struct HttpCaller {
    client: Client,
}

impl HttpCaller {
    /// Build a caller with [`DEFAULT_TIMEOUT`].
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(HttpCaller { client })
    }

    /// Full request: method, url, headers, optional body.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        headers: &[(&str, &str)],
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse> {
        let mut request = self.client.request(method, url);
        if !headers.is_empty() {
            request = request.headers(build_headers(headers)?);
        }
        if let Some(body) = body {
            request = request.body(body);
        }
        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    /// GET returning only the body.
    pub async fn get(&self, url: &str) -> Result<Vec<u8>> {
        Ok(self.request(Method::GET, url, &[], None).await?.body)
    }

    /// GET with request headers, returning the full response.
    pub async fn get_with(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse> {
        self.request(Method::GET, url, headers, None).await
    }

    /// POST returning only the body.
    pub async fn post(&self, url: &str, body: Vec<u8>) -> Result<Vec<u8>> {
        Ok(self.request(Method::POST, url, &[], Some(body)).await?.body)
    }

    /// POST with request headers, returning the full response.
    pub async fn post_with(
        &self,
        url: &str,
        body: Vec<u8>,
        headers: &[(&str, &str)],
    ) -> Result<HttpResponse> {
        self.request(Method::POST, url, headers, Some(body)).await
    }

    /// POST `payload` as JSON and decode a JSON response body.
    pub async fn post_json<T: Serialize>(
        &self,
        url: &str,
        payload: &T,
    ) -> Result<serde_json::Value> {
        let response = self.client.post(url).json(payload).send().await?;
        Ok(response.json().await?)
    }
}

static DEFAULT_CALLER: Lazy<HttpCaller> =
    Lazy::new(|| HttpCaller::new().expect("default http client"));

/// One-off GET over the shared default caller.
pub async fn get(url: &str) -> Result<Vec<u8>> {
    DEFAULT_CALLER.get(url).await
}

/// One-off POST over the shared default caller.
pub async fn post(url: &str, body: Vec<u8>) -> Result<Vec<u8>> {
    DEFAULT_CALLER.post(url, body).await
}

fn build_headers(pairs: &[(&str, &str)]) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(pairs.len());
    for (name, value) in pairs {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| HttpError::HeaderName((*name).to_string()))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| HttpError::HeaderValue(name.as_str().to_string()))?;
        map.insert(name, value);
    }
    Ok(map)
}

use std::collections::HashMap;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared::error::FetchError;

/// Options forwarded with every feed request. They pass through the widget
/// opaquely; only the transport interprets them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestOptions {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub credentials: Option<String>,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiEndpoint {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub options: RequestOptions,
}

impl ApiEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            options: RequestOptions::default(),
        }
    }

    /// The configured URL, or `MissingUrl` when it is absent or blank.
    pub fn resolve_url(&self) -> std::result::Result<&str, FetchError> {
        match self.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(FetchError::MissingUrl),
        }
    }
}

/// Response envelope handed back by the transport: a success indicator, the
/// human-readable status text, and the raw body to decode on demand.
#[derive(Debug, Clone)]
pub struct WireResponse {
    pub ok: bool,
    pub status_text: String,
    pub body: Vec<u8>,
}

impl WireResponse {
    pub fn json<T: DeserializeOwned>(&self) -> std::result::Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[async_trait]
pub trait HttpCapability: Send + Sync {
    async fn execute(&self, url: &str, options: &RequestOptions) -> Result<WireResponse>;
}

pub struct MissingHttpCapability;

#[async_trait]
impl HttpCapability for MissingHttpCapability {
    async fn execute(&self, url: &str, _options: &RequestOptions) -> Result<WireResponse> {
        Err(anyhow!("http transport unavailable for {url}"))
    }
}

pub struct ReqwestHttp {
    client: Client,
}

impl ReqwestHttp {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for ReqwestHttp {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpCapability for ReqwestHttp {
    async fn execute(&self, url: &str, options: &RequestOptions) -> Result<WireResponse> {
        let url = url::Url::parse(url).with_context(|| format!("invalid feed url: {url}"))?;
        let method = match options.method.as_deref() {
            Some(name) => reqwest::Method::from_bytes(name.to_ascii_uppercase().as_bytes())
                .map_err(|_| anyhow!("invalid request method: {name}"))?,
            None => reqwest::Method::GET,
        };

        // `credentials` is a cookie policy for browser-like transports; it
        // has no reqwest equivalent and rides along untouched.
        let mut request = self.client.request(method, url);
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await?;
        let status = response.status();
        let status_text = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.to_string());
        let body = response.bytes().await?.to_vec();

        Ok(WireResponse {
            ok: status.is_success(),
            status_text,
            body,
        })
    }
}

#[cfg(test)]
#[path = "tests/fetch_tests.rs"]
mod tests;

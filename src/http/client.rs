//! reqwest-backed transport
//!
//! Sends exactly one request per call and classifies failures:
//! - Timeouts become `Error::Timeout`
//! - Non-2xx responses become `Error::HttpStatus` with the body text
//! - Everything else reqwest reports becomes `Error::Http`

use super::transport::Transport;
use crate::config::ClientConfig;
use crate::endpoint::Query;
use crate::error::{Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// HTTP transport for one XMLAgent URL
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport from a validated config
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.validate()?;
        let timeout = config.timeout()?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Target URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn request(&self, method: Method, query: &Query) -> RequestBuilder {
        let mut req = self.client.request(method, self.base_url.clone());
        if !query.is_empty() {
            req = req.query(query.pairs());
        }
        req
    }

    async fn send(&self, method: Method, req: RequestBuilder) -> Result<Bytes> {
        let response = req.send().await.map_err(|e| self.classify(e))?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("{} {} failed with {}", method, self.base_url, status.as_u16());
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        debug!("{} {} -> {} bytes", method, self.base_url, body.len());
        Ok(body)
    }

    fn classify(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            return Error::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            };
        }
        Error::Http(e)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, query: &Query) -> Result<Bytes> {
        let req = self.request(Method::GET, query);
        self.send(Method::GET, req).await
    }

    async fn post(&self, query: &Query, body: &Value) -> Result<Bytes> {
        let req = self.request(Method::POST, query).json(body);
        self.send(Method::POST, req).await
    }

    async fn reachable(&self) -> bool {
        match self.client.get(self.base_url.clone()).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Reachability check of {} failed: {}", self.base_url, e);
                false
            }
        }
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

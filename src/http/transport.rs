//! Transport abstraction

use crate::endpoint::Query;
use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;

/// Sends one request to the XMLAgent URL and returns the raw body
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET with query parameters
    async fn get(&self, query: &Query) -> Result<Bytes>;

    /// POST a JSON body with query parameters
    async fn post(&self, query: &Query, body: &Value) -> Result<Bytes>;

    /// Whether the URL answers with a success status
    async fn reachable(&self) -> bool;
}

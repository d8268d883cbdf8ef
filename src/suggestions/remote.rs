//! Remote company lookup (Clearbit autocomplete)

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use super::engine::{MAX_SUGGESTIONS, MIN_QUERY_LEN};

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("lookup request failed: {0}")]
    Transport(String),

    #[error("lookup timed out")]
    Timeout,

    #[error("lookup returned HTTP {0}")]
    Status(u16),

    #[error("lookup response could not be decoded: {0}")]
    Decode(String),
}

/// Slower external source consulted when local matches are sparse
#[async_trait]
pub trait RemoteLookup: Send + Sync {
    async fn lookup(&self, query: &str) -> Result<Vec<String>, LookupError>;
}

#[derive(Debug, Deserialize)]
struct ClearbitCompany {
    name: String,
}

pub struct ClearbitLookup {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl ClearbitLookup {
    pub fn new(client: Client, base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            timeout,
        }
    }
}

#[async_trait]
impl RemoteLookup for ClearbitLookup {
    async fn lookup(&self, query: &str) -> Result<Vec<String>, LookupError> {
        if query.trim().chars().count() < MIN_QUERY_LEN {
            return Ok(Vec::new());
        }

        let url = format!("{}?query={}", self.base_url, urlencoding::encode(query));

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LookupError::Timeout
                } else {
                    LookupError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let companies: Vec<ClearbitCompany> = response.json().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::Timeout
            } else {
                LookupError::Decode(e.to_string())
            }
        })?;

        debug!(query = %query, count = companies.len(), "Clearbit lookup returned");

        Ok(companies
            .into_iter()
            .map(|c| c.name)
            .take(MAX_SUGGESTIONS)
            .collect())
    }
}

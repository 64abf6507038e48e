use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::types::Config;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },
    #[error("response from {url} is not valid JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Client for the StreamElements stats endpoints of a single channel.
pub struct StatsClient {
    http: reqwest::Client,
    base_url: String,
    channel: String,
    token: String,
}

impl StatsClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            channel: config.channel.clone(),
            token: config.token.clone(),
        }
    }

    pub fn chat_stats_url(&self) -> String {
        format!("{}/chatstats/{}/stats", self.base_url, self.channel)
    }

    pub fn channel_stats_url(&self) -> String {
        format!("{}/stats/{}", self.base_url, self.channel)
    }

    /// Per-chatter message counts for the channel.
    pub async fn fetch_chat_stats(&self) -> Result<Value, FetchError> {
        self.get_json(&self.chat_stats_url()).await
    }

    pub async fn fetch_channel_stats(&self) -> Result<Value, FetchError> {
        self.get_json(&self.channel_stats_url()).await
    }

    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        debug!("GET {}", url);
        let res = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
                body,
            });
        }

        res.json::<Value>().await.map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

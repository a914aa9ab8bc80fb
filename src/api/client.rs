// src/api/client.rs

use async_trait::async_trait;

use crate::api::models::{Video, VideoListResponse};

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Where the video grid gets its data from. The app only ever talks to this
/// trait so tests can swap the HTTP backend for a scripted one.
#[async_trait]
pub trait VideoSource: Send + Sync {
    async fn trending(&self) -> anyhow::Result<Vec<Video>>;
    async fn search(&self, query: &str) -> anyhow::Result<Vec<Video>>;
}

/// HTTP client for the `/api/trending` and `/api/search` endpoints.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn trending_url(&self) -> String {
        format!("{}/api/trending", self.base_url)
    }

    pub fn search_url(&self, query: &str) -> String {
        format!("{}/api/search?q={}", self.base_url, urlencoding::encode(query))
    }

    // Non-2xx statuses are turned into errors so they share the failure path
    // with transport and decode errors.
    async fn fetch_list(&self, url: &str) -> anyhow::Result<Vec<Video>> {
        tracing::debug!(%url, "fetching video list");
        let resp: VideoListResponse = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        tracing::debug!(%url, count = resp.items.len(), "video list loaded");
        Ok(resp.items)
    }
}

#[async_trait]
impl VideoSource for BackendClient {
    async fn trending(&self) -> anyhow::Result<Vec<Video>> {
        self.fetch_list(&self.trending_url()).await
    }

    async fn search(&self, query: &str) -> anyhow::Result<Vec<Video>> {
        self.fetch_list(&self.search_url(query)).await
    }
}

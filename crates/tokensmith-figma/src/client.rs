use crate::{DesignSource, FigmaConfig};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use tokensmith_common::{Result, TokensmithError};
use tokensmith_core::{DesignNode, NamedStyle, NodeIndex};
use tokio::time::{sleep, Duration};
use tracing::{debug, error, info, warn};

#[derive(Debug, Deserialize)]
struct FileResponse {
    #[serde(default)]
    name: Option<String>,
    document: DesignNode,
}

#[derive(Debug, Deserialize)]
struct StylesResponse {
    meta: StylesMeta,
}

#[derive(Debug, Deserialize)]
struct StylesMeta {
    #[serde(default)]
    styles: Vec<NamedStyle>,
}

#[derive(Debug, Deserialize)]
struct NodesResponse {
    #[serde(default)]
    nodes: HashMap<String, Option<NodeEntry>>,
}

#[derive(Debug, Deserialize)]
struct NodeEntry {
    document: DesignNode,
}

/// Figma REST API client
pub struct FigmaClient {
    config: FigmaConfig,
    client: reqwest::Client,
    max_retries: u32,
    base_delay: Duration,
}

impl FigmaClient {
    pub fn new(config: FigmaConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            client: reqwest::Client::new(),
            max_retries: 3,
            base_delay: Duration::from_millis(500),
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(FigmaConfig::from_env()?)
    }

    pub fn with_retries(mut self, max_retries: u32, base_delay: Duration) -> Self {
        self.max_retries = max_retries;
        self.base_delay = base_delay;
        self
    }

    fn file_url(&self, suffix: &str) -> String {
        format!(
            "{}/files/{}{}",
            self.config.api_base.trim_end_matches('/'),
            self.config.file_key,
            suffix
        )
    }

    /// Delay before retry number `attempt` (1-based), doubling each time
    fn backoff_delay(&self, attempt: u32) -> Duration {
        self.base_delay
            .saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)))
    }

    /// GET with retries on server errors and transport failures
    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T> {
        let mut attempt = 0;

        loop {
            match self.perform_get(url, query).await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    attempt += 1;
                    let delay = self.backoff_delay(attempt);
                    warn!(
                        "Figma request to {} failed ({}), retrying in {:?} (attempt {}/{})",
                        url, e, delay, attempt, self.max_retries
                    );
                    sleep(delay).await;
                }
                Err(e) => {
                    error!("Figma request to {} failed: {}", url, e);
                    return Err(e);
                }
            }
        }
    }

    async fn perform_get<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("X-Figma-Token", &self.config.access_token)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                TokensmithError::Transient(format!("Failed to reach Figma API: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(if status.is_server_error() {
                TokensmithError::Transient(format!("Figma API server error ({}): {}", status, body))
            } else {
                TokensmithError::Retrieval(format!("Figma API error ({}): {}", status, body))
            });
        }

        response.json::<T>().await.map_err(|e| {
            TokensmithError::Retrieval(format!("Failed to decode Figma API response: {}", e))
        })
    }
}

#[async_trait]
impl DesignSource for FigmaClient {
    fn file_key(&self) -> &str {
        &self.config.file_key
    }

    async fn fetch_document(&self) -> Result<DesignNode> {
        let file: FileResponse = self.get_json(&self.file_url(""), &[]).await?;
        info!(
            "Fetched Figma file '{}'",
            file.name.as_deref().unwrap_or(self.config.file_key.as_str())
        );
        Ok(file.document)
    }

    async fn fetch_styles(&self) -> Result<Vec<NamedStyle>> {
        let styles: StylesResponse = self.get_json(&self.file_url("/styles"), &[]).await?;
        info!("Fetched {} published styles", styles.meta.styles.len());
        Ok(styles.meta.styles)
    }

    async fn fetch_style_nodes(&self, ids: &[String]) -> Result<NodeIndex> {
        let ids = ids.join(",");
        let response: NodesResponse = self
            .get_json(&self.file_url("/nodes"), &[("ids", ids.as_str())])
            .await?;

        let mut index = NodeIndex::new();
        for (id, entry) in response.nodes {
            match entry {
                Some(entry) => index.insert(entry.document),
                None => warn!("Figma returned no node for style id {}", id),
            }
        }
        Ok(index)
    }
}

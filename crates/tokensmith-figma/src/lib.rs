mod client;
mod config;
mod snapshot;

pub use client::FigmaClient;
pub use config::FigmaConfig;
pub use snapshot::{save_snapshot, SnapshotSource};

use async_trait::async_trait;
use tokensmith_common::Result;
use tokensmith_core::{DesignInput, DesignNode, NamedStyle, NodeIndex};
use tracing::info;

/// Where design documents come from
#[async_trait]
pub trait DesignSource: Send + Sync {
    /// Identifier of the source file, carried into the retrieved input
    fn file_key(&self) -> &str;

    /// Root node of the document tree
    async fn fetch_document(&self) -> Result<DesignNode>;

    /// Published styles, in the order the source lists them
    async fn fetch_styles(&self) -> Result<Vec<NamedStyle>>;

    /// The nodes defining the given styles, indexed by id
    async fn fetch_style_nodes(&self, ids: &[String]) -> Result<NodeIndex>;

    /// Fetch everything extraction needs.
    ///
    /// The document and the style list are fetched concurrently; the style
    /// nodes are fetched once both have arrived.
    async fn fetch_input(&self) -> Result<DesignInput> {
        let (document, styles) = tokio::try_join!(self.fetch_document(), self.fetch_styles())?;

        let mut ids: Vec<String> = Vec::with_capacity(styles.len());
        for style in &styles {
            if !ids.contains(&style.node_id) {
                ids.push(style.node_id.clone());
            }
        }

        let nodes = if ids.is_empty() {
            NodeIndex::new()
        } else {
            self.fetch_style_nodes(&ids).await?
        };

        info!(
            "Retrieved document with {} styles ({} style nodes resolved)",
            styles.len(),
            nodes.len()
        );

        Ok(DesignInput {
            file_key: self.file_key().to_string(),
            document,
            styles,
            nodes,
        })
    }
}

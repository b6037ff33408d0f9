use crate::DesignSource;
use async_trait::async_trait;
use std::path::Path;
use tokensmith_common::Result;
use tokensmith_core::{DesignInput, DesignNode, NamedStyle, NodeIndex};
use tracing::info;

/// Serves a previously retrieved document from memory
pub struct SnapshotSource {
    input: DesignInput,
}

impl SnapshotSource {
    pub fn new(input: DesignInput) -> Self {
        Self { input }
    }

    /// Load a snapshot written by [`save_snapshot`]
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let input: DesignInput = serde_json::from_str(&content)?;
        info!(
            "Loaded snapshot {:?} ({} styles, {} nodes)",
            path,
            input.styles.len(),
            input.nodes.len()
        );
        Ok(Self::new(input))
    }
}

#[async_trait]
impl DesignSource for SnapshotSource {
    fn file_key(&self) -> &str {
        &self.input.file_key
    }

    async fn fetch_document(&self) -> Result<DesignNode> {
        Ok(self.input.document.clone())
    }

    async fn fetch_styles(&self) -> Result<Vec<NamedStyle>> {
        Ok(self.input.styles.clone())
    }

    async fn fetch_style_nodes(&self, ids: &[String]) -> Result<NodeIndex> {
        Ok(ids
            .iter()
            .filter_map(|id| self.input.nodes.resolve(id))
            .map(|node| (node.id.clone(), node.clone()))
            .collect())
    }
}

/// Save retrieved input so later extractions can run offline
pub async fn save_snapshot(path: &Path, input: &DesignInput) -> Result<()> {
    let json = serde_json::to_string_pretty(input)?;
    tokio::fs::write(path, json).await?;
    info!("Saved snapshot to {:?}", path);
    Ok(())
}

use crate::catalog::{ColorToken, ShadowToken, Token, TypographyToken};
use crate::document::{DesignNode, NamedStyle, NodeIndex, StyleKind};
use crate::resolvers::{resolve_color, resolve_shadow, resolve_typography, token_description};
use indexmap::IndexMap;
use tracing::{debug, warn};

/// Color, typography and shadow tokens resolved from published styles
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleCatalog {
    pub colors: IndexMap<String, ColorToken>,
    pub typography: IndexMap<String, TypographyToken>,
    pub shadows: IndexMap<String, ShadowToken>,
}

impl StyleCatalog {
    /// Resolve every style against its defining node, in list order.
    ///
    /// A later style with an already-seen name replaces the earlier token
    /// in place. Styles whose node is missing from the index resolve against an
    /// empty node and so produce fallback values.
    pub fn build(styles: &[NamedStyle], nodes: &NodeIndex) -> Self {
        let empty = DesignNode::default();
        let mut catalog = Self::default();

        for style in styles {
            let node = nodes.resolve(&style.node_id).unwrap_or_else(|| {
                warn!(
                    "Style '{}' references unknown node {}, using fallback values",
                    style.name, style.node_id
                );
                &empty
            });
            catalog.add(style, node);
        }

        debug!(
            "Resolved {} colors, {} typography styles, {} shadows",
            catalog.colors.len(),
            catalog.typography.len(),
            catalog.shadows.len()
        );
        catalog
    }

    fn add(&mut self, style: &NamedStyle, node: &DesignNode) {
        let description = token_description(style.description.as_deref());
        let figma_id = style.node_id.clone();

        match style.style_type {
            StyleKind::Fill => {
                let value = resolve_color(node.fills.first());
                self.colors.insert(
                    style.name.clone(),
                    Token {
                        value,
                        description,
                        figma_id,
                    },
                );
            }
            StyleKind::Text => {
                let value = resolve_typography(node.style.as_ref());
                self.typography.insert(
                    style.name.clone(),
                    Token {
                        value,
                        description,
                        figma_id,
                    },
                );
            }
            StyleKind::Effect => {
                let value = resolve_shadow(&node.effects);
                self.shadows.insert(
                    style.name.clone(),
                    Token {
                        value,
                        description,
                        figma_id,
                    },
                );
            }
            StyleKind::Grid => {
                debug!("Skipping grid style '{}'", style.name);
            }
        }
    }
}

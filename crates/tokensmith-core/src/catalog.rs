use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A named design value together with where it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token<T> {
    pub value: T,
    pub description: String,
    /// Id of the node that defines the style
    pub figma_id: String,
}

pub type ColorToken = Token<String>;
pub type TypographyToken = Token<Typography>;
pub type ShadowToken = Token<Shadow>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: String,
    pub font_size: String,
    pub font_weight: u32,
    pub line_height: String,
    pub letter_spacing: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub color: String,
    pub offset_x: String,
    pub offset_y: String,
    pub blur_radius: String,
}

/// Ordinal bucket name -> pixel value, in ascending value order
pub type ScaleMap = IndexMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCatalog {
    pub colors: IndexMap<String, ColorToken>,
    pub typography: IndexMap<String, TypographyToken>,
    pub shadows: IndexMap<String, ShadowToken>,
    pub border_radius: ScaleMap,
    pub spacing: ScaleMap,
    pub stroke_width: ScaleMap,
}

impl TokenCatalog {
    /// Total number of tokens across every category
    pub fn len(&self) -> usize {
        self.colors.len()
            + self.typography.len()
            + self.shadows.len()
            + self.border_radius.len()
            + self.spacing.len()
            + self.stroke_width.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    pub options: Vec<String>,
}

/// A reusable component extracted from a component set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    pub name: String,
    pub description: String,
    pub props: IndexMap<String, PropDescriptor>,
    pub examples: Vec<String>,
    pub figma_url: String,
}

/// The final extracted design system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSystem {
    pub name: String,
    pub description: String,
    pub tokens: TokenCatalog,
    pub components: Vec<ComponentDescriptor>,
}

impl DesignSystem {
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}

use crate::catalog::{ComponentDescriptor, DesignSystem, TokenCatalog};
use crate::components::ComponentHarvester;
use crate::document::DesignInput;
use crate::scales::{name_scale, ScaleSets};
use crate::styles::StyleCatalog;
use tracing::info;

pub const DEFAULT_SYSTEM_NAME: &str = "My Design System";
pub const DEFAULT_SYSTEM_DESCRIPTION: &str = "Auto-generated from Figma";

/// Top-level metadata and deep-link settings for one extraction
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub name: String,
    pub description: String,
    /// Source file identifier used in component deep links; when empty the
    /// input's own key is used
    pub file_key: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_SYSTEM_NAME.to_string(),
            description: DEFAULT_SYSTEM_DESCRIPTION.to_string(),
            file_key: String::new(),
        }
    }
}

/// Combine the extracted parts into the final descriptor
pub fn assemble(
    options: &ExtractOptions,
    styles: StyleCatalog,
    scales: &ScaleSets,
    components: Vec<ComponentDescriptor>,
) -> DesignSystem {
    DesignSystem {
        name: options.name.clone(),
        description: options.description.clone(),
        tokens: TokenCatalog {
            colors: styles.colors,
            typography: styles.typography,
            shadows: styles.shadows,
            border_radius: name_scale(&scales.radius),
            spacing: name_scale(&scales.spacing),
            stroke_width: name_scale(&scales.stroke),
        },
        components,
    }
}

/// Runs the whole extraction pipeline over a retrieved document
pub struct DesignSystemExtractor {
    options: ExtractOptions,
}

impl DesignSystemExtractor {
    pub fn new() -> Self {
        Self {
            options: ExtractOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract tokens and components; the input is only read
    pub fn extract(&self, input: &DesignInput) -> DesignSystem {
        info!(
            "Extracting design system from {} styles and {} indexed nodes",
            input.styles.len(),
            input.nodes.len()
        );

        let styles = StyleCatalog::build(&input.styles, &input.nodes);
        let scales = ScaleSets::collect(&input.document);
        let file_key = if self.options.file_key.is_empty() {
            input.file_key.as_str()
        } else {
            self.options.file_key.as_str()
        };
        let components = ComponentHarvester::new(file_key).harvest(&input.document);

        let system = assemble(&self.options, styles, &scales, components);
        info!(
            "Extracted {} components and {} tokens",
            system.component_count(),
            system.token_count()
        );
        system
    }
}

impl Default for DesignSystemExtractor {
    fn default() -> Self {
        Self::new()
    }
}

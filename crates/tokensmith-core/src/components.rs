use crate::catalog::{ComponentDescriptor, PropDescriptor};
use crate::document::{DesignNode, NodeType, PropertyDefinition};
use indexmap::IndexMap;
use tracing::debug;

pub const UNNAMED_COMPONENT: &str = "Unnamed Component";
pub const NO_DESCRIPTION: &str = "No description provided.";
pub const UNKNOWN_PROP_TYPE: &str = "UNKNOWN";
/// Attribute value in example snippets for props without options
pub const DEFAULT_EXAMPLE_VALUE: &str = "default";

const FIGMA_FILE_URL: &str = "https://www.figma.com/file";

/// Collects component descriptors from component-set nodes
pub struct ComponentHarvester {
    file_key: String,
}

impl ComponentHarvester {
    /// `file_key` identifies the source file in generated deep links
    pub fn new(file_key: impl Into<String>) -> Self {
        Self {
            file_key: file_key.into(),
        }
    }

    /// Describe every component set under `root`, in document pre-order.
    ///
    /// Nested sets are found too, and sets sharing a name each get their own
    /// entry.
    pub fn harvest(&self, root: &DesignNode) -> Vec<ComponentDescriptor> {
        let components: Vec<_> = root
            .descendants()
            .filter_map(|node| match node.node_type {
                NodeType::ComponentSet => Some(self.describe(node)),
                _ => None,
            })
            .collect();

        debug!("Harvested {} component sets", components.len());
        components
    }

    pub fn describe(&self, node: &DesignNode) -> ComponentDescriptor {
        let name = component_name(node.name.as_deref());
        let props: IndexMap<String, PropDescriptor> = node
            .component_property_definitions
            .iter()
            .map(|(prop, definition)| (prop.clone(), describe_prop(definition)))
            .collect();
        let example = example_snippet(&name, &props);

        ComponentDescriptor {
            description: component_description(node.description.as_deref()),
            examples: vec![example],
            figma_url: self.deep_link(&node.id),
            name,
            props,
        }
    }

    pub fn deep_link(&self, node_id: &str) -> String {
        format!(
            "{}/{}?node-id={}",
            FIGMA_FILE_URL,
            self.file_key,
            urlencoding::encode(node_id)
        )
    }
}

pub fn component_name(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => UNNAMED_COMPONENT.to_string(),
    }
}

pub fn component_description(description: Option<&str>) -> String {
    match description {
        Some(description) if !description.is_empty() => description.to_string(),
        _ => NO_DESCRIPTION.to_string(),
    }
}

pub fn describe_prop(definition: &PropertyDefinition) -> PropDescriptor {
    PropDescriptor {
        kind: definition
            .kind
            .clone()
            .unwrap_or_else(|| UNKNOWN_PROP_TYPE.to_string()),
        options: definition.variant_options.clone().unwrap_or_default(),
    }
}

/// One-line usage tag, e.g. `<Button size="Small" state="Default" />`
pub fn example_snippet(name: &str, props: &IndexMap<String, PropDescriptor>) -> String {
    let attributes: Vec<String> = props
        .iter()
        .map(|(prop, descriptor)| {
            let value = descriptor
                .options
                .first()
                .map(String::as_str)
                .unwrap_or(DEFAULT_EXAMPLE_VALUE);
            format!("{}=\"{}\"", prop, value)
        })
        .collect();

    if attributes.is_empty() {
        format!("<{} />", name)
    } else {
        format!("<{} {} />", name, attributes.join(" "))
    }
}

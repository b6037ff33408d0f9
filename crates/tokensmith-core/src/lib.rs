//! Design token and component extraction from design documents.
//!
//! The pipeline is synchronous and performs no I/O apart from [`output`]:
//! styles are resolved into color/typography/shadow tokens, numeric scale
//! values are collected from the whole tree and named by rank, and
//! component sets become component descriptors.

pub mod assembler;
pub mod catalog;
pub mod components;
pub mod document;
pub mod output;
pub mod resolvers;
pub mod scales;
pub mod styles;

pub use assembler::{assemble, DesignSystemExtractor, ExtractOptions};
pub use catalog::{
    ColorToken, ComponentDescriptor, DesignSystem, PropDescriptor, ScaleMap, Shadow, ShadowToken,
    Token, TokenCatalog, Typography, TypographyToken,
};
pub use components::ComponentHarvester;
pub use document::{
    DesignInput, DesignNode, Effect, EffectKind, NamedStyle, NodeIndex, NodeType, Paint,
    PaintKind, PropertyDefinition, Rgba, StyleKind, TypeStyle,
};
pub use output::{read_descriptor, to_json, write_descriptor};
pub use scales::{name_scale, ScaleSet, ScaleSets};
pub use styles::StyleCatalog;

/// Well-known file the extracted design system is written to and served from
pub const DEFAULT_OUTPUT_PATH: &str = "mcp-design-system.json";

/// Common error types
///
/// Missing or partial fields in the design document never show up here: the
/// extractor substitutes documented fallbacks for those. Only retrieval,
/// configuration, and output encoding/IO failures reach the caller.
#[derive(thiserror::Error, Debug)]
pub enum TokensmithError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Retrieval error: {0}")]
    Retrieval(String),

    /// Server-side or transport failure that may succeed on retry
    #[error("Transient retrieval error: {0}")]
    Transient(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TokensmithError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, TokensmithError::Transient(_))
    }
}

pub type Result<T> = std::result::Result<T, TokensmithError>;

use tokensmith_common::{Result, TokensmithError};

pub const DEFAULT_API_BASE: &str = "https://api.figma.com/v1";

/// Connection settings for the Figma REST API
#[derive(Debug, Clone)]
pub struct FigmaConfig {
    pub file_key: String,
    pub access_token: String,
    pub api_base: String,
}

impl Default for FigmaConfig {
    fn default() -> Self {
        Self {
            file_key: String::new(),
            access_token: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl FigmaConfig {
    /// Read `FIGMA_FILE_KEY` and `FIGMA_PERSONAL_ACCESS_TOKEN`, and
    /// optionally `FIGMA_API_BASE`
    pub fn from_env() -> Result<Self> {
        let file_key = require_env("FIGMA_FILE_KEY")?;
        let access_token = require_env("FIGMA_PERSONAL_ACCESS_TOKEN")?;
        let api_base =
            std::env::var("FIGMA_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Ok(Self {
            file_key,
            access_token,
            api_base,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.file_key.trim().is_empty() {
            return Err(TokensmithError::Config("Figma file key is required".into()));
        }
        if self.access_token.trim().is_empty() {
            return Err(TokensmithError::Config(
                "Figma personal access token is required".into(),
            ));
        }
        Ok(())
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| TokensmithError::Config(format!("{} environment variable not set", name)))
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] ureq::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("Unknown preference: {0}")]
    UnknownPreference(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Search query cannot be empty")]
    EmptyQuery,
}

impl ScoutError {
    /// Get an actionable hint for how to resolve this error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ScoutError::HttpError(_) => Some(
                "Check your internet connection. Platforms also rate-limit scrapers;\nretrying after a short wait often helps.",
            ),
            ScoutError::UnknownPlatform(_) => Some(
                "Run `shopscout platforms` to see supported platforms",
            ),
            ScoutError::UnknownPreference(_) => Some(
                "Valid preferences are: quality, price, neutral",
            ),
            ScoutError::InvalidInput(_) => Some(
                "Expected a JSON array of product records, e.g. the `products` field of\n`shopscout search <query> --json`",
            ),
            ScoutError::EmptyQuery => Some(
                "Provide a search term, e.g. `shopscout search \"wireless earbuds\"`",
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoutError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetBrowserError {
    #[error("Failed to load {catalog} list: {message}")]
    LoadFailure { catalog: String, message: String },

    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Conflicting node kinds at '{path}': existing {existing}, incoming {incoming}")]
    KindConflict {
        path: String,
        existing: &'static str,
        incoming: &'static str,
    },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AssetBrowserError {
    /// Build a load failure for the named catalog
    pub fn load_failure(catalog: impl Into<String>, message: impl Into<String>) -> Self {
        Self::LoadFailure {
            catalog: catalog.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AssetBrowserError>;

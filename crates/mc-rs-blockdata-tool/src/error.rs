use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Material(#[from] mc_rs_blockdata::MaterialError),

    #[error("invalid block reference {0:?}, expected <id> or <id>:<data>")]
    BadReference(String),

    #[error("nothing matches {0:?}")]
    NotFound(String),
}

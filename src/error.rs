// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartographError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Entity model is not valid JSON: {0}")]
    Model(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("No node with id '{0}' in the current graph")]
    UnknownNode(String),

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CartographError>;

// Allow `?` on std::io::Error by converting with unknown path.
impl From<std::io::Error> for CartographError {
    fn from(source: std::io::Error) -> Self {
        CartographError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    ReadConfig { path: PathBuf, source: io::Error },
    #[error("failed to parse {}: {source}", .path.display())]
    ParseConfig {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("ron: {0}")]
    Ron(#[from] ron::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("could not read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;

impl From<FolioError> for io::Error {
    fn from(err: FolioError) -> Self {
        match err {
            FolioError::Io(inner) => inner,
            other => io::Error::other(other),
        }
    }
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Error accessing [{}]: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error
    },
    #[error("Error writing ledger: {0}")]
    Csv(#[from] csv::Error)
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

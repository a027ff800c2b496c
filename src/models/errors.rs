use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Could not open transaction file [{}]: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error
    },
    #[error("Malformed transaction file: missing required column [{0}]")]
    MissingColumn(&'static str),
    #[error("Malformed transaction file: {0}")]
    Malformed(#[from] csv::Error)
}

impl LedgerError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open { path: path.into(), source }
    }
}

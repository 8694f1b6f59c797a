//! Error types shared by the dataset loader and the state store.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("dataset not found at {}", path.display())]
    DatasetNotFound { path: PathBuf },

    #[error("dataset {} is not a JSON array of problems", path.display())]
    DatasetInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "State file {} is not valid JSON. Fix or delete it before continuing.",
        path.display()
    )]
    StateCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("reminder due date for {id} must be a finite timestamp, got {due_date}")]
    InvalidDueDate { id: i64, due_date: f64 },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

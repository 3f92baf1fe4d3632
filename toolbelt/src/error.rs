use std::path::PathBuf;
use thiserror::Error;
use toolbelt_lib::UtilError;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Util(#[from] UtilError),

    #[error("unknown format '{0}', use 'text' or 'json'")]
    UnknownFormat(String),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

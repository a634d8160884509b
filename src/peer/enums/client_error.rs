use thiserror::Error;
use crate::store::enums::store_error::StoreError;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Local file not found: {0}")]
    LocalFileMissing(String),

    #[error("{0}")]
    NotRegistered(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    NoHolders(String),

    #[error("Tracker error: {0}")]
    Tracker(String),

    #[error("Transfer failed: {0}")]
    TransferFailed(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Connection error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

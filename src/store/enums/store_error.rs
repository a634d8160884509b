use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid file name: {0}")]
    InvalidName(String),

    #[error("File not found: {0}")]
    Missing(String),

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Message exceeds {0} bytes")]
    TooLarge(usize),

    #[error("Connection closed in the middle of a message")]
    Truncated,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

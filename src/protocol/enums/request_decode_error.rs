use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestDecodeError {
    #[error("Invalid request: {0}")]
    Malformed(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

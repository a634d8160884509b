use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Client not registered")]
    NotRegistered(String),

    #[error("Host {0} not found")]
    NotFound(String),
}

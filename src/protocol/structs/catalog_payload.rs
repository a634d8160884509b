use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogPayload {
    pub identity: String,
    pub files: Vec<String>,
}

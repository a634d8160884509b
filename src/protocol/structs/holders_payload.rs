use serde::{Deserialize, Serialize};
use crate::registry::structs::holder::Holder;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HoldersPayload {
    pub peers: Vec<Holder>,
}

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LivenessPayload {
    pub identity: String,
    pub alive: bool,
    /// Local time, `%Y-%m-%d %H:%M:%S`.
    pub last_seen: String,
}

use std::collections::BTreeSet;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerRecord {
    pub identity: String,
    pub address: String,
    pub port: u16,
    pub catalog: BTreeSet<String>,
    pub last_seen: DateTime<Utc>,
}

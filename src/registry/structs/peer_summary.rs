use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerSummary {
    pub identity: String,
    pub address: String,
    pub port: u16,
    pub file_count: usize,
    pub last_seen: DateTime<Utc>,
}

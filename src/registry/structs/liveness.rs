use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Liveness {
    pub alive: bool,
    pub last_seen: DateTime<Utc>,
}

use std::collections::BTreeSet;
use chrono::{DateTime, TimeDelta, Utc};
use crate::registry::structs::holder::Holder;
use crate::registry::structs::peer_record::PeerRecord;
use crate::registry::structs::peer_summary::PeerSummary;

/// A peer counts as alive while it was seen less than this many seconds ago.
pub const ALIVE_THRESHOLD_SECONDS: i64 = 60;

impl PeerRecord {
    pub fn new(identity: &str, address: &str, port: u16, now: DateTime<Utc>) -> PeerRecord {
        PeerRecord {
            identity: identity.to_string(),
            address: address.to_string(),
            port,
            catalog: BTreeSet::new(),
            last_seen: now,
        }
    }

    pub fn holds(&self, filename: &str) -> bool {
        self.catalog.contains(filename)
    }

    pub fn is_alive_at(&self, now: DateTime<Utc>) -> bool {
        now - self.last_seen < TimeDelta::seconds(ALIVE_THRESHOLD_SECONDS)
    }

    pub fn to_holder(&self) -> Holder {
        Holder {
            identity: self.identity.clone(),
            address: self.address.clone(),
            port: self.port,
        }
    }

    pub fn to_summary(&self) -> PeerSummary {
        PeerSummary {
            identity: self.identity.clone(),
            address: self.address.clone(),
            port: self.port,
            file_count: self.catalog.len(),
            last_seen: self.last_seen,
        }
    }
}

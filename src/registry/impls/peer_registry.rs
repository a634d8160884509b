use chrono::{DateTime, Utc};
use log::debug;
use crate::common::common::current_time;
use crate::registry::enums::registry_error::RegistryError;
use crate::registry::structs::holder::Holder;
use crate::registry::structs::liveness::Liveness;
use crate::registry::structs::peer_record::PeerRecord;
use crate::registry::structs::peer_registry::PeerRegistry;
use crate::registry::structs::peer_summary::PeerSummary;
use crate::registry::traits::registry::Registry;

impl PeerRegistry {
    pub fn new() -> PeerRegistry {
        PeerRegistry::default()
    }

    pub fn register_at(&self, identity: &str, address: &str, port: u16, now: DateTime<Utc>)
    {
        let mut lock = self.peers.lock();
        let previous = lock.insert(identity.to_string(), PeerRecord::new(identity, address, port, now));
        if let Some(previous) = previous {
            debug!("[REGISTRY] {identity} re-registered, dropped {} catalog entries", previous.catalog.len());
        }
    }

    pub fn publish_at(&self, identity: &str, filename: &str, now: DateTime<Utc>) -> Result<(), RegistryError>
    {
        let mut lock = self.peers.lock();
        match lock.get_mut(identity) {
            None => Err(RegistryError::NotRegistered(identity.to_string())),
            Some(record) => {
                record.catalog.insert(filename.to_string());
                record.last_seen = now;
                Ok(())
            }
        }
    }

    pub fn liveness_at(&self, identity: &str, now: DateTime<Utc>) -> Result<Liveness, RegistryError>
    {
        let lock = self.peers.lock();
        match lock.get(identity) {
            None => Err(RegistryError::NotFound(identity.to_string())),
            Some(record) => Ok(Liveness {
                alive: record.is_alive_at(now),
                last_seen: record.last_seen,
            })
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.peers.lock().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.peers.lock().is_empty()
    }
}

impl Registry for PeerRegistry {
    #[tracing::instrument(level = "debug", skip(self))]
    fn register(&self, identity: &str, address: &str, port: u16)
    {
        self.register_at(identity, address, port, current_time());
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn publish(&self, identity: &str, filename: &str) -> Result<(), RegistryError>
    {
        self.publish_at(identity, filename, current_time())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn find_holders(&self, filename: &str, exclude_identity: &str) -> Vec<Holder>
    {
        let lock = self.peers.lock();
        lock.values()
            .filter(|record| record.identity != exclude_identity && record.holds(filename))
            .map(PeerRecord::to_holder)
            .collect()
    }

    fn catalog(&self, identity: &str) -> Result<Vec<String>, RegistryError>
    {
        let lock = self.peers.lock();
        lock.get(identity)
            .map(|record| record.catalog.iter().cloned().collect())
            .ok_or_else(|| RegistryError::NotFound(identity.to_string()))
    }

    fn liveness(&self, identity: &str) -> Result<Liveness, RegistryError>
    {
        self.liveness_at(identity, current_time())
    }

    fn snapshot(&self) -> Vec<PeerSummary>
    {
        let lock = self.peers.lock();
        lock.values().map(PeerRecord::to_summary).collect()
    }
}

use crate::registry::enums::registry_error::RegistryError;
use crate::registry::structs::holder::Holder;
use crate::registry::structs::liveness::Liveness;
use crate::registry::structs::peer_summary::PeerSummary;

/// Operations the tracker performs against its peer registry.
///
/// Implementations own their locking; each call is atomic with respect to
/// every other call on the same registry.
pub trait Registry: Send + Sync {
    /// Inserts or fully replaces the record for `identity` with an empty catalog.
    fn register(&self, identity: &str, address: &str, port: u16);

    /// Adds `filename` to the catalog of `identity`. Publishing a name twice is a no-op.
    fn publish(&self, identity: &str, filename: &str) -> Result<(), RegistryError>;

    /// Every registered peer other than `exclude_identity` whose catalog holds `filename`.
    fn find_holders(&self, filename: &str, exclude_identity: &str) -> Vec<Holder>;

    fn catalog(&self, identity: &str) -> Result<Vec<String>, RegistryError>;

    /// Read-only; never updates `last_seen`.
    fn liveness(&self, identity: &str) -> Result<Liveness, RegistryError>;

    /// All records as of a single point in time.
    fn snapshot(&self) -> Vec<PeerSummary>;
}

/// A single registered peer.
pub mod peer_record;

/// The lock-guarded identity to record map.
pub mod peer_registry;

/// A peer holding a requested file.
pub mod holder;

/// Result of a liveness query.
pub mod liveness;

/// One row of an administrative snapshot.
pub mod peer_summary;

//! Peer registry owned by the tracker.
//!
//! Maps a peer identity to its transfer address, its advertised catalog of
//! file names and the time it was last heard from.
//!
//! # Locking
//!
//! Every operation runs under one exclusive lock for its whole duration. There
//! is no reader/writer split and no per-identity locking: two operations never
//! observe each other half-applied.
//!
//! # Lifecycle
//!
//! - `register` creates or fully replaces a record (the previous catalog is dropped)
//! - `publish` adds a name to the catalog and bumps `last_seen`
//! - records are never removed; staleness only shows up through `liveness`
//!
//! # Example
//!
//! ```rust,ignore
//! use peershare::registry::structs::peer_registry::PeerRegistry;
//! use peershare::registry::traits::registry::Registry;
//!
//! let registry = PeerRegistry::new();
//! registry.register("alice", "127.0.0.1", 7000);
//! registry.publish("alice", "doc.txt")?;
//! let holders = registry.find_holders("doc.txt", "bob");
//! ```

/// Registry errors.
pub mod enums;

/// Registry records and query results.
pub mod structs;

/// Implementation blocks for the registry.
pub mod impls;

/// The interface the tracker handler talks to.
pub mod traits;

/// Unit tests for registry invariants.
pub mod tests;

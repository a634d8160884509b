//! The tracker: request handling over the peer registry and its TCP listener.
//!
//! # Architecture
//!
//! - `PeerTracker` owns the registry behind the `Registry` trait, the
//!   configuration and the statistics counters
//! - `TrackerServer` accepts connections and runs one task per connection
//! - each connection reads a request, dispatches it, writes exactly one reply
//!
//! The tracker never touches file bytes. It only answers who claims to hold what.
//!
//! # Example
//!
//! ```rust,ignore
//! use peershare::tracker::structs::peer_tracker::PeerTracker;
//! use peershare::tracker::tracker::tracker_service;
//!
//! let tracker = Arc::new(PeerTracker::new(config.clone()));
//! let (tx, rx) = tokio::sync::watch::channel(false);
//! let (addr, handle) = tracker_service("0.0.0.0:5000".parse()?, tracker, rx).await?;
//! ```

/// Implementation blocks for the tracker and its listener.
pub mod impls;

/// Tracker and listener structs.
pub mod structs;

/// Service entry points.
#[allow(clippy::module_inception)]
pub mod tracker;

/// Unit tests for request handling.
pub mod tests;

//! Peer client logic.
//!
//! A [`PeerClient`](structs::peer_client::PeerClient) talks to the tracker over
//! short request/response connections and to other peers through the download
//! handshake served by [`crate::transfer`]. Each call opens its own connection
//! and completes before returning; nothing is retried automatically.
//!
//! Publishing copies into the local store first and only then notifies the
//! tracker. A failed notification leaves the local copy in place, so the store
//! and the tracker's catalog can drift apart until the caller publishes again.

pub mod enums;
pub mod structs;
pub mod impls;

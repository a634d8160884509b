//! # PeerShare
//!
//! A small tracker-coordinated peer-to-peer file sharing overlay built on Tokio.
//!
//! ## Overview
//!
//! A central tracker records which peer claims to hold which named file. Peers
//! register with the tracker, publish the files in their local repository, and
//! ask the tracker who holds a file they want. The download itself runs directly
//! between two peers; the tracker never touches file bytes.
//!
//! Both sides speak JSON over short-lived TCP connections:
//!
//! - peer → tracker: `register`, `publish`, `fetch`, `discover`, `ping`
//! - peer → peer: `download`, followed by an acknowledgement and the raw bytes
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use peershare::config::structs::configuration::Configuration;
//! use peershare::tracker::structs::peer_tracker::PeerTracker;
//! use peershare::tracker::tracker::tracker_service;
//!
//! let config = Arc::new(Configuration::load_from_file("config.toml", false)?);
//! let tracker = Arc::new(PeerTracker::new(config.clone()));
//! let (_tx, rx) = tokio::sync::watch::channel(false);
//! let (addr, handle) = tracker_service(config.tracker.bind_address.parse()?, tracker, rx).await?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup, timestamps, listener helpers and the generic error type
//! - [`config`] - Configuration loading, defaults and validation
//! - [`peer`] - Peer client: register, publish, fetch, discover and ping
//! - [`protocol`] - Request/response types and message framing
//! - [`registry`] - The tracker's peer registry
//! - [`stats`] - Tracker statistics counters
//! - [`store`] - A peer's local file repository
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Tracker request handling and listener
//! - [`transfer`] - Peer side download server

/// Common utilities and shared functionality.
///
/// Contains logging setup, timestamp formatting, listener construction and
/// the generic error type used by the configuration layer.
pub mod common;
/// Configuration management module.
///
/// Handles loading, parsing, creating and validating `config.toml`.
pub mod config;
/// Peer client module.
///
/// Drives the tracker commands and the download handshake from the peer side.
pub mod peer;
/// Wire protocol module.
///
/// Tagged request and response types shared by the tracker, the transfer
/// server and the client, plus the reader that reassembles JSON messages
/// from a TCP stream.
pub mod protocol;
/// Peer registry module.
///
/// Maps peer identities to their address, published catalog and last
/// activity, behind a single exclusive lock.
pub mod registry;
/// Statistics tracking module.
pub mod stats;
/// Local file store module.
pub mod store;
/// CLI argument parsing.
///
/// Defines the command-line interface of the `peershare` binary.
pub mod structs;
/// Tracker module.
///
/// Contains the request handler dispatching to the registry and the TCP
/// listener that runs one task per accepted connection.
pub mod tracker;
/// Peer transfer server module.
pub mod transfer;

//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Tracker listener configuration.
pub mod tracker_server_config;

/// Peer side configuration (identity, tracker, transfer listener, store).
pub mod peer_config;

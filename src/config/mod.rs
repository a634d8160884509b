//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the configuration from
//! TOML files. One file configures both roles: the tracker reads `[tracker]`,
//! a peer reads `[peer]`.
//!
//! # Configuration Structure
//!
//! - **log_level**: Logging verbosity (`off`, `trace`, `debug`, `info`, `warn`, `error`)
//! - **log_console_interval**: Seconds between `[STATS]` console lines on the tracker
//! - **tracker**: Listener address of the tracker
//! - **peer**: Identity, tracker location, transfer listener and local store of a peer
//!
//! # Example
//!
//! ```rust,ignore
//! use peershare::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration handling.
pub mod tests;

//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used by both the
//! tracker and the peer side of the overlay.
//!
//! # Utilities
//!
//! - Logging setup
//! - Timestamp helpers
//! - Bind address checks
//!
//! # Data Structures
//!
//! - `CustomError` - Plain message error used by the configuration layer
//!
//! # Example
//!
//! ```rust,ignore
//! use peershare::common::common::{current_time, format_timestamp};
//!
//! let now = current_time();
//! println!("{}", format_timestamp(now));
//! ```

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

//! Statistics tracking for the tracker.
//!
//! Counters are plain atomics so request handlers can bump them without
//! touching the registry lock. A background task prints them periodically.
//!
//! # Example
//!
//! ```rust,ignore
//! use peershare::stats::enums::stats_event::StatsEvent;
//!
//! tracker.update_stats(StatsEvent::FetchHandled, 1);
//! let stats = tracker.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshots).
pub mod structs;

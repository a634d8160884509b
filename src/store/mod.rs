//! A peer's local file store.
//!
//! A flat directory of files addressed by name. It is what the transfer server
//! serves from and what publish and fetch write into. It is not locked:
//! concurrent writers of the same name race and the last write wins.

pub mod enums;
pub mod structs;
pub mod impls;

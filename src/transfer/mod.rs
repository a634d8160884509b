//! Peer side file server.
//!
//! Every running peer listens for `download` requests from other peers. One
//! connection carries exactly one transfer:
//!
//! 1. downloader sends `{"command":"download","filename":...}`
//! 2. server answers with the offer `{"status":"success","filename":...,"size":N}`
//!    or `{"status":"error","message":"File not found"}` and closes
//! 3. downloader sends the two byte token `OK`
//! 4. server streams exactly `N` raw bytes and closes

pub mod structs;
pub mod impls;
#[allow(clippy::module_inception)]
pub mod transfer;

//! Wire format shared by the tracker, the transfer server and the peer client.
//!
//! Every message is a single JSON object sent without a delimiter. Requests are
//! tagged by a `command` field, responses by a `status` field that is either
//! `success` or `error`; error responses carry a human readable `message` and
//! nothing else crosses the wire.
//!
//! # Commands
//!
//! | Command    | Fields                        | Success payload                  |
//! |------------|-------------------------------|----------------------------------|
//! | `register` | identity, address, port       | `{message}`                      |
//! | `publish`  | identity, filename            | `{message}`                      |
//! | `fetch`    | identity, filename            | `{peers: [{identity, address, port}]}` |
//! | `discover` | identity                      | `{identity, files}`              |
//! | `ping`     | identity                      | `{identity, alive, last_seen}`   |
//! | `download` | filename (peer to peer)       | `{filename, size}`, then ack, then raw bytes |
//!
//! # Framing
//!
//! [`MessageReader`](structs::message_reader::MessageReader) buffers reads until
//! one complete JSON value has arrived, bounded by a fixed buffer size. Bytes
//! that follow the value stay buffered for the next read.

/// Request, response and error enumerations.
pub mod enums;

/// Payload structs and the message reader.
pub mod structs;

/// Implementation blocks for encoding and decoding.
pub mod impls;

/// Protocol constants and the shared command decoder.
#[allow(clippy::module_inception)]
pub mod protocol;

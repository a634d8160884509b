/// Requests understood by the tracker.
pub mod tracker_request;

/// Requests understood by a peer's transfer server.
pub mod peer_request;

/// `success` / `error` envelope around every reply.
pub mod response;

/// Any success payload the tracker can send.
pub mod tracker_payload;

/// Reasons a request could not be decoded.
pub mod request_decode_error;

/// Reasons a message could not be read off a stream.
pub mod frame_error;

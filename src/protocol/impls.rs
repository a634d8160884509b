pub mod tracker_request;
pub mod peer_request;
pub mod response;
pub mod message_reader;

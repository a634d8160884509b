pub mod peer_tracker;
pub mod tracker_server;

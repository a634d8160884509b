/// Registry, configuration and counters shared by every connection.
pub mod peer_tracker;

/// TCP listener for tracker requests.
pub mod tracker_server;

pub mod peer_tracker;

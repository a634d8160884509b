pub mod peer_client;
pub mod fetch_outcome;

pub mod peer_client;

pub mod peer_record;
pub mod peer_registry;

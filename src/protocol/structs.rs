pub mod ack_payload;
pub mod holders_payload;
pub mod catalog_payload;
pub mod liveness_payload;
pub mod download_offer;
pub mod message_reader;

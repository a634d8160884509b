use serde::{Deserialize, Serialize};
use crate::protocol::structs::ack_payload::AckPayload;
use crate::protocol::structs::catalog_payload::CatalogPayload;
use crate::protocol::structs::holders_payload::HoldersPayload;
use crate::protocol::structs::liveness_payload::LivenessPayload;

// Variant order matters when decoding: `Ack` only needs `message`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum TrackerPayload {
    Liveness(LivenessPayload),
    Catalog(CatalogPayload),
    Holders(HoldersPayload),
    Ack(AckPayload),
}

use std::collections::BTreeMap;
use parking_lot::Mutex;
use crate::registry::structs::peer_record::PeerRecord;

#[derive(Debug, Default)]
pub struct PeerRegistry {
    pub(crate) peers: Mutex<BTreeMap<String, PeerRecord>>,
}

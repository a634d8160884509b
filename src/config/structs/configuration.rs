use serde::{Deserialize, Serialize};
use crate::config::structs::peer_config::PeerConfig;
use crate::config::structs::tracker_server_config::TrackerServerConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub tracker: TrackerServerConfig,
    pub peer: PeerConfig,
}

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PeerConfig {
    /// Name this peer registers under; never verified by the tracker.
    pub identity: String,
    pub tracker_address: String,
    /// Host other peers should dial; sent to the tracker on register.
    pub advertise_address: String,
    pub bind_address: String,
    pub repository_path: String,
    /// Try every returned holder in order instead of only the first one.
    #[serde(default)]
    pub try_all_holders: bool,
}

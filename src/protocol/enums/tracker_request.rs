use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum TrackerRequest {
    Register {
        identity: String,
        address: String,
        port: u16,
    },
    Publish {
        identity: String,
        filename: String,
    },
    Fetch {
        identity: String,
        filename: String,
    },
    Discover {
        identity: String,
    },
    Ping {
        identity: String,
    },
}

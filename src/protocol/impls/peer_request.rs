use serde_json::Value;
use crate::protocol::enums::peer_request::PeerRequest;
use crate::protocol::enums::request_decode_error::RequestDecodeError;
use crate::protocol::protocol::{decode_command, PEER_COMMANDS};

impl PeerRequest {
    pub fn decode(value: Value) -> Result<PeerRequest, RequestDecodeError>
    {
        decode_command(value, &PEER_COMMANDS)
    }

    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error>
    {
        serde_json::to_vec(self)
    }

    pub fn filename(&self) -> &str
    {
        match self {
            PeerRequest::Download { filename } => filename
        }
    }
}

use serde_json::Value;
use crate::protocol::enums::request_decode_error::RequestDecodeError;
use crate::protocol::enums::tracker_request::TrackerRequest;
use crate::protocol::protocol::{decode_command, TRACKER_COMMANDS};

impl TrackerRequest {
    pub fn decode(value: Value) -> Result<TrackerRequest, RequestDecodeError>
    {
        decode_command(value, &TRACKER_COMMANDS)
    }

    #[cfg(test)]
    pub fn from_slice(data: &[u8]) -> Result<TrackerRequest, RequestDecodeError>
    {
        let value: Value = serde_json::from_slice(data)
            .map_err(|e| RequestDecodeError::Malformed(e.to_string()))?;
        Self::decode(value)
    }

    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error>
    {
        serde_json::to_vec(self)
    }

    pub fn command(&self) -> &'static str
    {
        match self {
            TrackerRequest::Register { .. } => "register",
            TrackerRequest::Publish { .. } => "publish",
            TrackerRequest::Fetch { .. } => "fetch",
            TrackerRequest::Discover { .. } => "discover",
            TrackerRequest::Ping { .. } => "ping",
        }
    }

    /// For `discover` and `ping` this is the identity being asked about.
    pub fn identity(&self) -> &str
    {
        match self {
            TrackerRequest::Register { identity, .. }
            | TrackerRequest::Publish { identity, .. }
            | TrackerRequest::Fetch { identity, .. }
            | TrackerRequest::Discover { identity }
            | TrackerRequest::Ping { identity } => identity
        }
    }
}

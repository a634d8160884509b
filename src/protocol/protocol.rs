use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use crate::protocol::enums::response::Response;
use crate::protocol::enums::request_decode_error::RequestDecodeError;

/// Upper bound for a single request message.
pub const MAX_MESSAGE_SIZE: usize = 4096;

/// Upper bound for a single response message; a fetch reply lists every holder.
pub const MAX_RESPONSE_SIZE: usize = 65536;

/// Sent by the downloader once it is ready to receive the file bytes.
pub const ACK_TOKEN: &[u8; 2] = b"OK";

pub const TRACKER_COMMANDS: [&str; 5] = ["register", "publish", "fetch", "discover", "ping"];
pub const PEER_COMMANDS: [&str; 1] = ["download"];

/// Decodes a request tagged by `command`, telling a malformed envelope apart
/// from a well formed one naming a command outside `known`.
pub fn decode_command<T: DeserializeOwned>(value: Value, known: &[&str]) -> Result<T, RequestDecodeError>
{
    let command = match value.as_object() {
        None => return Err(RequestDecodeError::Malformed(String::from("request is not a JSON object"))),
        Some(object) => match object.get("command") {
            Some(Value::String(command)) => command.clone(),
            Some(_) => return Err(RequestDecodeError::Malformed(String::from("command is not a string"))),
            None => return Err(RequestDecodeError::Malformed(String::from("missing command"))),
        }
    };

    if !known.contains(&command.as_str()) {
        return Err(RequestDecodeError::UnknownCommand(command));
    }

    serde_json::from_value(value).map_err(|e| RequestDecodeError::Malformed(e.to_string()))
}

/// Writes one encoded response and flushes it.
pub async fn write_response<W: AsyncWrite + Unpin, T: Serialize>(writer: &mut W, response: &Response<T>) -> std::io::Result<()>
{
    let data = response.encode().map_err(std::io::Error::other)?;
    writer.write_all(&data).await?;
    writer.flush().await
}

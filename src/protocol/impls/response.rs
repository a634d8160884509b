use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use crate::protocol::enums::response::Response;

impl<T> Response<T> {
    pub fn success(payload: T) -> Response<T> {
        Response::Success(payload)
    }

    pub fn error(message: impl Into<String>) -> Response<T> {
        Response::Error { message: message.into() }
    }

    #[cfg(test)]
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success(_))
    }

    /// Success payload, or the error message sent by the remote side.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Response::Success(payload) => Ok(payload),
            Response::Error { message } => Err(message),
        }
    }
}

impl<T: Serialize> Response<T> {
    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

impl<T: DeserializeOwned> Response<T> {
    pub fn decode(value: Value) -> Result<Response<T>, serde_json::Error> {
        serde_json::from_value(value)
    }
}

use serde_json::Value;
use tokio::io::{AsyncRead, AsyncReadExt};
use crate::protocol::enums::frame_error::FrameError;
use crate::protocol::protocol::MAX_MESSAGE_SIZE;
use crate::protocol::structs::message_reader::MessageReader;

impl Default for MessageReader {
    fn default() -> Self {
        MessageReader::new()
    }
}

impl MessageReader {
    pub fn new() -> MessageReader {
        MessageReader::with_limit(MAX_MESSAGE_SIZE)
    }

    pub fn with_limit(limit: usize) -> MessageReader {
        MessageReader {
            buffer: Vec::with_capacity(limit.min(MAX_MESSAGE_SIZE)),
            limit,
        }
    }

    /// Reads the next JSON value. `Ok(None)` means the remote side closed the
    /// connection between messages.
    pub async fn read_value<R: AsyncRead + Unpin>(&mut self, reader: &mut R) -> Result<Option<Value>, FrameError>
    {
        loop {
            if let Some(value) = self.take_value()? {
                return Ok(Some(value));
            }

            if self.buffer.len() >= self.limit {
                return Err(FrameError::TooLarge(self.limit));
            }

            let mut chunk = vec![0u8; self.limit - self.buffer.len()];
            let read = reader.read(&mut chunk).await?;
            if read == 0 {
                return if self.buffer.iter().all(u8::is_ascii_whitespace) {
                    self.buffer.clear();
                    Ok(None)
                } else {
                    Err(FrameError::Truncated)
                };
            }
            self.buffer.extend_from_slice(&chunk[..read]);
        }
    }

    /// Reads the next value and fails on a clean close as well.
    pub async fn expect_value<R: AsyncRead + Unpin>(&mut self, reader: &mut R) -> Result<Value, FrameError>
    {
        match self.read_value(reader).await? {
            Some(value) => Ok(value),
            None => Err(FrameError::Truncated),
        }
    }

    /// Bytes received after the last complete message.
    pub fn take_remaining(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buffer)
    }

    fn take_value(&mut self) -> Result<Option<Value>, FrameError>
    {
        if self.buffer.is_empty() {
            return Ok(None);
        }

        let (result, consumed) = {
            let mut stream = serde_json::Deserializer::from_slice(&self.buffer).into_iter::<Value>();
            let result = stream.next();
            (result, stream.byte_offset())
        };

        match result {
            Some(Ok(value)) => {
                self.buffer.drain(..consumed);
                Ok(Some(value))
            }
            Some(Err(error)) if error.is_eof() => Ok(None),
            Some(Err(error)) => Err(FrameError::InvalidJson(error.to_string())),
            None => Ok(None),
        }
    }
}

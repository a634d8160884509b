use std::net::SocketAddr;
use std::sync::Arc;
use log::{debug, error, info};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use crate::common::common::bind_tcp_listener;
use crate::protocol::enums::frame_error::FrameError;
use crate::protocol::enums::request_decode_error::RequestDecodeError;
use crate::protocol::enums::response::Response;
use crate::protocol::enums::tracker_payload::TrackerPayload;
use crate::protocol::enums::tracker_request::TrackerRequest;
use crate::protocol::protocol::write_response;
use crate::protocol::structs::message_reader::MessageReader;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::peer_tracker::PeerTracker;
use crate::tracker::structs::tracker_server::TrackerServer;

impl TrackerServer {
    pub fn new(tracker: Arc<PeerTracker>, bind_address: SocketAddr) -> std::io::Result<TrackerServer>
    {
        let listener = bind_tcp_listener(bind_address)?;
        Ok(TrackerServer {
            listener,
            tracker,
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr>
    {
        self.listener.local_addr()
    }

    /// Accepts until `rx` changes. Each connection runs in its own task, so a
    /// stalled peer only blocks its own handler.
    pub async fn start(&self, mut rx: tokio::sync::watch::Receiver<bool>)
    {
        loop {
            tokio::select! {
                _ = rx.changed() => {
                    info!("[TRACKER] Stopping listener on {:?}...", self.listener.local_addr().ok());
                    break;
                }
                accepted = self.listener.accept() => {
                    match accepted {
                        Ok((stream, remote_addr)) => {
                            debug!("[TRACKER] New connection from {remote_addr}");
                            self.tracker.update_stats(StatsEvent::ConnectionsHandled, 1);
                            let tracker = self.tracker.clone();
                            tokio::spawn(async move {
                                TrackerServer::handle_connection(tracker, stream, remote_addr).await;
                            });
                        }
                        Err(e) => {
                            error!("[TRACKER] Error accepting connection: {e}");
                        }
                    }
                }
            }
        }
    }

    /// Serves requests until the peer disconnects or sends something undecodable.
    /// Unknown commands are answered and the connection stays open.
    pub async fn handle_connection(tracker: Arc<PeerTracker>, mut stream: TcpStream, remote_addr: SocketAddr)
    {
        let mut reader = MessageReader::new();
        loop {
            let value = match reader.read_value(&mut stream).await {
                Ok(Some(value)) => value,
                Ok(None) => break,
                Err(FrameError::Io(e)) => {
                    debug!("[TRACKER] Connection {remote_addr} failed: {e}");
                    break;
                }
                Err(e) => {
                    tracker.update_stats(StatsEvent::Malformed, 1);
                    debug!("[TRACKER] Malformed message from {remote_addr}: {e}");
                    let _ = write_response(&mut stream, &Response::<TrackerPayload>::error("Invalid JSON")).await;
                    break;
                }
            };

            let (response, keep_open) = match TrackerRequest::decode(value) {
                Ok(request) => (tracker.handle_request(request), true),
                Err(RequestDecodeError::UnknownCommand(command)) => {
                    tracker.update_stats(StatsEvent::UnknownCommand, 1);
                    debug!("[TRACKER] Unknown command from {remote_addr}: {command}");
                    (Response::error(RequestDecodeError::UnknownCommand(command).to_string()), true)
                }
                Err(error) => {
                    tracker.update_stats(StatsEvent::Malformed, 1);
                    debug!("[TRACKER] Malformed request from {remote_addr}: {error}");
                    (Response::error(error.to_string()), false)
                }
            };

            if let Err(e) = write_response(&mut stream, &response).await {
                debug!("[TRACKER] Could not answer {remote_addr}: {e}");
                break;
            }
            if !keep_open {
                break;
            }
        }
        let _ = stream.shutdown().await;
    }
}

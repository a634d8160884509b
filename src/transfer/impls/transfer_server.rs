use std::net::SocketAddr;
use std::sync::Arc;
use log::{debug, error, info, warn};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use crate::common::common::bind_tcp_listener;
use crate::protocol::enums::peer_request::PeerRequest;
use crate::protocol::enums::response::Response;
use crate::protocol::protocol::{write_response, ACK_TOKEN};
use crate::protocol::structs::download_offer::DownloadOffer;
use crate::protocol::structs::message_reader::MessageReader;
use crate::store::structs::file_store::FileStore;
use crate::transfer::structs::transfer_server::TransferServer;

impl TransferServer {
    pub fn new(store: Arc<FileStore>, bind_address: SocketAddr) -> std::io::Result<TransferServer>
    {
        let listener = bind_tcp_listener(bind_address)?;
        Ok(TransferServer {
            listener,
            store,
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr>
    {
        self.listener.local_addr()
    }

    pub async fn start(&self, mut rx: tokio::sync::watch::Receiver<bool>)
    {
        loop {
            tokio::select! {
                _ = rx.changed() => {
                    info!("[TRANSFER] Stopping listener on {:?}...", self.listener.local_addr().ok());
                    break;
                }
                accepted = self.listener.accept() => {
                    match accepted {
                        Ok((stream, remote_addr)) => {
                            debug!("[TRANSFER] New connection from {remote_addr}");
                            let store = self.store.clone();
                            tokio::spawn(async move {
                                TransferServer::handle_connection(store, stream, remote_addr).await;
                            });
                        }
                        Err(e) => {
                            error!("[TRANSFER] Error accepting connection: {e}");
                        }
                    }
                }
            }
        }
    }

    /// Serves a single download and closes the connection.
    pub async fn handle_connection(store: Arc<FileStore>, mut stream: TcpStream, remote_addr: SocketAddr)
    {
        if let Err(e) = TransferServer::serve_download(&store, &mut stream, remote_addr).await {
            debug!("[TRANSFER] Connection {remote_addr} aborted: {e}");
        }
        let _ = stream.shutdown().await;
    }

    async fn serve_download(store: &FileStore, stream: &mut TcpStream, remote_addr: SocketAddr) -> std::io::Result<()>
    {
        let mut reader = MessageReader::new();
        let value = match reader.expect_value(stream).await {
            Ok(value) => value,
            Err(e) => {
                let _ = write_response(stream, &Response::<DownloadOffer>::error("Invalid JSON")).await;
                return Err(std::io::Error::other(e));
            }
        };

        let filename = match PeerRequest::decode(value) {
            Ok(request) => request.filename().to_string(),
            Err(e) => {
                write_response(stream, &Response::<DownloadOffer>::error(e.to_string())).await?;
                return Ok(());
            }
        };

        if !store.contains(&filename).await {
            info!("[TRANSFER] {remote_addr} asked for missing file: {filename}");
            return write_response(stream, &Response::<DownloadOffer>::error("File not found")).await;
        }
        let data = match store.read(&filename).await {
            Ok(data) => data,
            Err(e) => {
                warn!("[TRANSFER] Unable to read {filename}: {e}");
                return Err(std::io::Error::other(e));
            }
        };

        let offer = DownloadOffer {
            filename: filename.clone(),
            size: data.len() as u64,
        };
        write_response(stream, &Response::success(offer)).await?;

        let mut ack = reader.take_remaining();
        if ack.len() < ACK_TOKEN.len() {
            let mut rest = vec![0u8; ACK_TOKEN.len() - ack.len()];
            stream.read_exact(&mut rest).await?;
            ack.extend_from_slice(&rest);
        }
        if ack.as_slice() != ACK_TOKEN {
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, "unexpected acknowledgement"));
        }

        stream.write_all(&data).await?;
        stream.flush().await?;
        info!("[TRANSFER] Sent {filename} ({} bytes) to {remote_addr}", data.len());
        Ok(())
    }
}

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use crate::config::structs::peer_config::PeerConfig;
use crate::peer::enums::client_error::ClientError;
use crate::peer::structs::fetch_outcome::FetchOutcome;
use crate::peer::structs::peer_client::PeerClient;
use crate::protocol::enums::peer_request::PeerRequest;
use crate::protocol::enums::response::Response;
use crate::protocol::enums::tracker_request::TrackerRequest;
use crate::protocol::protocol::{ACK_TOKEN, MAX_RESPONSE_SIZE};
use crate::protocol::structs::ack_payload::AckPayload;
use crate::protocol::structs::catalog_payload::CatalogPayload;
use crate::protocol::structs::download_offer::DownloadOffer;
use crate::protocol::structs::holders_payload::HoldersPayload;
use crate::protocol::structs::liveness_payload::LivenessPayload;
use crate::protocol::structs::message_reader::MessageReader;
use crate::registry::enums::registry_error::RegistryError;
use crate::registry::structs::holder::Holder;
use crate::store::enums::store_error::StoreError;
use crate::store::structs::file_store::FileStore;
use crate::store::structs::stored_file::StoredFile;

impl PeerClient {
    pub fn new(identity: &str, tracker_address: SocketAddr, advertise_address: &str, port: u16, store: Arc<FileStore>) -> PeerClient
    {
        PeerClient {
            identity: identity.to_string(),
            tracker_address,
            advertise_address: advertise_address.to_string(),
            port,
            store,
            try_all_holders: false,
        }
    }

    /// Builds a client from the `[peer]` section. `port` is the port the
    /// transfer server actually listens on.
    pub fn from_config(config: &PeerConfig, tracker_address: SocketAddr, port: u16, store: Arc<FileStore>) -> PeerClient
    {
        let mut client = PeerClient::new(&config.identity, tracker_address, &config.advertise_address, port, store);
        client.try_all_holders = config.try_all_holders;
        client
    }

    pub fn with_try_all_holders(mut self, enabled: bool) -> PeerClient
    {
        self.try_all_holders = enabled;
        self
    }

    pub async fn register(&self) -> Result<String, ClientError>
    {
        let request = TrackerRequest::Register {
            identity: self.identity.clone(),
            address: self.advertise_address.clone(),
            port: self.port,
        };
        let ack: AckPayload = self.request_tracker(&request).await?
            .into_result()
            .map_err(ClientError::Tracker)?;
        info!("[PEER] {}: {}", self.identity, ack.message);
        Ok(ack.message)
    }

    /// Copies `local_path` into the store as `name`, then tells the tracker.
    /// The local copy stays even when the tracker refuses the publish.
    pub async fn publish(&self, local_path: &Path, name: &str) -> Result<String, ClientError>
    {
        match tokio::fs::metadata(local_path).await {
            Ok(meta) if meta.is_file() => {}
            _ => return Err(ClientError::LocalFileMissing(local_path.display().to_string()))
        }
        match self.store.import(local_path, name).await {
            Ok(size) => debug!("[PEER] Copied {} ({size} bytes) into the repository as {name}", local_path.display()),
            Err(StoreError::Missing(path)) => return Err(ClientError::LocalFileMissing(path)),
            Err(e) => return Err(ClientError::Store(e))
        }
        self.notify_publish(name).await
    }

    /// Tells the tracker this peer holds `name`, without touching the store.
    pub async fn notify_publish(&self, name: &str) -> Result<String, ClientError>
    {
        let request = TrackerRequest::Publish {
            identity: self.identity.clone(),
            filename: name.to_string(),
        };
        let ack: AckPayload = self.request_tracker(&request).await?
            .into_result()
            .map_err(|message| {
                if message == RegistryError::NotRegistered(String::new()).to_string() {
                    ClientError::NotRegistered(message)
                } else {
                    ClientError::Tracker(message)
                }
            })?;
        info!("[PEER] {}: {}", self.identity, ack.message);
        Ok(ack.message)
    }

    /// Downloads `filename` from a holder named by the tracker, stores it, and
    /// publishes it under this peer's identity. Only the first holder is tried
    /// unless `try_all_holders` is set.
    pub async fn fetch(&self, filename: &str) -> Result<FetchOutcome, ClientError>
    {
        let request = TrackerRequest::Fetch {
            identity: self.identity.clone(),
            filename: filename.to_string(),
        };
        let holders: HoldersPayload = self.request_tracker(&request).await?
            .into_result()
            .map_err(ClientError::NoHolders)?;

        let candidates = match self.try_all_holders {
            true => holders.peers.len(),
            false => 1
        };

        let mut last_error = ClientError::NoHolders(format!("No peers found with file: {filename}"));
        for holder in holders.peers.into_iter().take(candidates) {
            match self.download_from(&holder, filename).await {
                Ok(data) => {
                    self.store.write(filename, &data).await?;
                    info!("[PEER] Downloaded {filename} ({} bytes) from {}", data.len(), holder.identity);
                    let self_published = match self.notify_publish(filename).await {
                        Ok(_) => true,
                        Err(e) => {
                            warn!("[PEER] Could not publish downloaded {filename}: {e}");
                            false
                        }
                    };
                    return Ok(FetchOutcome {
                        holder,
                        size: data.len() as u64,
                        self_published,
                    });
                }
                Err(e) => {
                    warn!("[PEER] Download of {filename} from {} failed: {e}", holder.identity);
                    last_error = e;
                }
            }
        }
        Err(last_error)
    }

    /// Runs the download handshake against one holder and returns the bytes.
    /// When the holder closes early, whatever arrived is returned.
    pub async fn download_from(&self, holder: &Holder, filename: &str) -> Result<Vec<u8>, ClientError>
    {
        let mut stream = TcpStream::connect((holder.address.as_str(), holder.port)).await
            .map_err(transfer_failed)?;
        let request = PeerRequest::Download { filename: filename.to_string() };
        stream.write_all(&request.encode().map_err(transfer_failed)?).await.map_err(transfer_failed)?;
        stream.flush().await.map_err(transfer_failed)?;

        let mut reader = MessageReader::new();
        let value = reader.expect_value(&mut stream).await.map_err(transfer_failed)?;
        let offer: DownloadOffer = Response::decode(value)
            .map_err(transfer_failed)?
            .into_result()
            .map_err(ClientError::TransferFailed)?;

        stream.write_all(ACK_TOKEN).await.map_err(transfer_failed)?;
        stream.flush().await.map_err(transfer_failed)?;

        let size = offer.size as usize;
        let mut data = reader.take_remaining();
        let mut chunk = vec![0u8; 8192];
        while data.len() < size {
            let read = stream.read(&mut chunk).await.map_err(transfer_failed)?;
            if read == 0 {
                warn!("[PEER] {} closed after {} of {size} bytes of {filename}", holder.identity, data.len());
                break;
            }
            data.extend_from_slice(&chunk[..read]);
        }
        data.truncate(size);
        Ok(data)
    }

    pub async fn discover(&self, identity: &str) -> Result<CatalogPayload, ClientError>
    {
        let request = TrackerRequest::Discover { identity: identity.to_string() };
        self.request_tracker(&request).await?
            .into_result()
            .map_err(lookup_error)
    }

    pub async fn ping(&self, identity: &str) -> Result<LivenessPayload, ClientError>
    {
        let request = TrackerRequest::Ping { identity: identity.to_string() };
        self.request_tracker(&request).await?
            .into_result()
            .map_err(lookup_error)
    }

    pub async fn list_repository(&self) -> Result<Vec<StoredFile>, ClientError>
    {
        Ok(self.store.list().await?)
    }

    async fn request_tracker<T: DeserializeOwned>(&self, request: &TrackerRequest) -> Result<Response<T>, ClientError>
    {
        debug!("[PEER] Sending {} to {}", request.command(), self.tracker_address);
        let mut stream = TcpStream::connect(self.tracker_address).await?;
        stream.write_all(&request.encode()?).await?;
        stream.flush().await?;

        let mut reader = MessageReader::with_limit(MAX_RESPONSE_SIZE);
        let value = reader.expect_value(&mut stream).await
            .map_err(|e| ClientError::Tracker(e.to_string()))?;
        let _ = stream.shutdown().await;
        Ok(Response::decode(value)?)
    }
}

fn lookup_error(message: String) -> ClientError
{
    if message.starts_with("Host ") && message.ends_with(" not found") {
        ClientError::NotFound(message)
    } else {
        ClientError::Tracker(message)
    }
}

fn transfer_failed(error: impl ToString) -> ClientError
{
    ClientError::TransferFailed(error.to_string())
}

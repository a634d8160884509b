use std::net::SocketAddr;
use std::sync::Arc;
use crate::store::structs::file_store::FileStore;

#[derive(Debug, Clone)]
pub struct PeerClient {
    pub identity: String,
    pub tracker_address: SocketAddr,
    /// Host other peers should connect to for downloads.
    pub advertise_address: String,
    /// Port of this peer's transfer server.
    pub port: u16,
    pub store: Arc<FileStore>,
    /// Try the remaining holders when a download fails. Off by default.
    pub try_all_holders: bool,
}

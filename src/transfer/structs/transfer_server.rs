use std::sync::Arc;
use tokio::net::TcpListener;
use crate::store::structs::file_store::FileStore;

#[derive(Debug)]
pub struct TransferServer {
    pub(crate) listener: TcpListener,
    pub(crate) store: Arc<FileStore>,
}

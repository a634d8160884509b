use std::net::SocketAddr;
use std::sync::Arc;
use log::info;
use tokio::task::JoinHandle;
use crate::store::structs::file_store::FileStore;
use crate::transfer::structs::transfer_server::TransferServer;

/// Binds the transfer listener and serves downloads from `store` on a new task.
pub async fn transfer_service(addr: SocketAddr, store: Arc<FileStore>, rx: tokio::sync::watch::Receiver<bool>) -> std::io::Result<(SocketAddr, JoinHandle<()>)>
{
    let transfer_server = TransferServer::new(store, addr)?;
    let local_addr = transfer_server.local_addr()?;
    info!("[TRANSFER] Serving {} on {local_addr}", transfer_server.store.root().display());
    let handle = tokio::spawn(async move {
        transfer_server.start(rx).await;
    });
    Ok((local_addr, handle))
}

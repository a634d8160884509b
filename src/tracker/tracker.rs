use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use log::info;
use tokio::task::JoinHandle;
use crate::tracker::structs::peer_tracker::PeerTracker;
use crate::tracker::structs::tracker_server::TrackerServer;

/// Binds the tracker listener and runs its accept loop on a new task.
pub async fn tracker_service(addr: SocketAddr, tracker: Arc<PeerTracker>, rx: tokio::sync::watch::Receiver<bool>) -> std::io::Result<(SocketAddr, JoinHandle<()>)>
{
    let tracker_server = TrackerServer::new(tracker, addr)?;
    let local_addr = tracker_server.local_addr()?;
    info!("[TRACKER] Starting a server listener on {local_addr}");
    let handle = tokio::spawn(async move {
        tracker_server.start(rx).await;
    });
    Ok((local_addr, handle))
}

/// Prints the tracker statistics every `interval` seconds until `rx` changes.
pub async fn console_stats_service(tracker: Arc<PeerTracker>, interval: u64, mut rx: tokio::sync::watch::Receiver<bool>) -> JoinHandle<()>
{
    info!("[BOOT] Starting thread for console updates with {interval} seconds delay...");
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval.max(1)));
        interval.tick().await;
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    tracker.log_console_stats();
                }
                _ = rx.changed() => {
                    info!("[BOOT] Shutting down thread for console updates...");
                    return;
                }
            }
        }
    })
}

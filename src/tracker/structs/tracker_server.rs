use std::sync::Arc;
use tokio::net::TcpListener;
use crate::tracker::structs::peer_tracker::PeerTracker;

pub struct TrackerServer {
    pub(crate) listener: TcpListener,
    pub(crate) tracker: Arc<PeerTracker>,
}
